use crate::error::{Error, Result};

/// Camera intrinsics for the pinhole ground-projection model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpec {
    /// Sensor width in millimeters
    pub sensor_width_mm: f64,
    /// Sensor height in millimeters
    pub sensor_height_mm: f64,
    /// Focal length in millimeters
    pub focal_length_mm: f64,
}

impl CameraSpec {
    /// Create a camera spec, rejecting non-positive dimensions
    pub fn new(sensor_width_mm: f64, sensor_height_mm: f64, focal_length_mm: f64) -> Result<Self> {
        for (field, value) in [
            ("sensor_width_mm", sensor_width_mm),
            ("sensor_height_mm", sensor_height_mm),
            ("focal_length_mm", focal_length_mm),
        ] {
            if !(value > 0.0) {
                return Err(Error::InputOutOfRange {
                    field,
                    value,
                    expected: "> 0",
                });
            }
        }

        Ok(Self {
            sensor_width_mm,
            sensor_height_mm,
            focal_length_mm,
        })
    }

    /// Ground area imaged from the given altitude, as `(width, height)` in meters
    ///
    /// Pinhole projection: the sensor millimeters cancel against the focal
    /// length, so the result carries the altitude's unit.
    pub fn ground_footprint(&self, altitude_m: f64) -> (f64, f64) {
        let width = 2.0 * altitude_m * self.sensor_width_mm / (2.0 * self.focal_length_mm);
        let height = 2.0 * altitude_m * self.sensor_height_mm / (2.0 * self.focal_length_mm);
        (width, height)
    }
}

/// Flight parameters for a survey mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSpec {
    /// Flight altitude above the start point in meters
    pub altitude_m: f64,
    /// Image overlap along a scan line, in `[0, 1)`
    pub frontal_overlap: f64,
    /// Image overlap between adjacent scan lines, in `[0, 1)`
    pub lateral_overlap: f64,
}

impl FlightSpec {
    /// Create a flight spec, rejecting non-positive altitude and overlaps
    /// outside `[0, 1)`
    pub fn new(altitude_m: f64, frontal_overlap: f64, lateral_overlap: f64) -> Result<Self> {
        if !(altitude_m > 0.0) {
            return Err(Error::InputOutOfRange {
                field: "altitude_m",
                value: altitude_m,
                expected: "> 0",
            });
        }
        for (field, value) in [
            ("frontal_overlap", frontal_overlap),
            ("lateral_overlap", lateral_overlap),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(Error::InputOutOfRange {
                    field,
                    value,
                    expected: "in [0, 1)",
                });
            }
        }

        Ok(Self {
            altitude_m,
            frontal_overlap,
            lateral_overlap,
        })
    }
}
