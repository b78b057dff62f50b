//! Boustrophedon scan planning
//!
//! Pure, stateless path synthesis: every function here is a deterministic
//! function of its inputs with no I/O and no shared state, so independent
//! missions can be planned concurrently without coordination.

mod heading;
mod polygon;
mod rectangle;

use crate::error::{Error, Result};
use crate::types::{CameraSpec, FlightSpec, Polygon, Rectangle, Waypoint};

/// Minimum usable line/point spacing in meters
///
/// Spacing shrinks as overlap approaches 1; below this floor the scan would
/// degenerate into an unbounded number of lines.
const MIN_SPACING_M: f64 = 1e-2;

/// Line and point spacing derived from camera geometry and overlap
///
/// Public so a UI layer can preview pass spacing before committing to a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Ground footprint width of one image in meters
    pub fov_width_m: f64,
    /// Ground footprint height of one image in meters
    pub fov_height_m: f64,
    /// Lateral distance between adjacent scan lines in meters
    pub line_m: f64,
    /// Frontal distance between capture points along a line in meters
    pub point_m: f64,
}

impl Spacing {
    /// Derive scan spacing for a camera/flight combination
    ///
    /// Line spacing is the image footprint height reduced by the lateral
    /// overlap, point spacing the footprint width reduced by the frontal
    /// overlap. Either falling below the 1cm floor fails with
    /// [`Error::InvalidSpacing`].
    pub fn for_mission(camera: &CameraSpec, flight: &FlightSpec) -> Result<Self> {
        let (fov_width_m, fov_height_m) = camera.ground_footprint(flight.altitude_m);
        let line_m = fov_height_m * (1.0 - flight.lateral_overlap);
        let point_m = fov_width_m * (1.0 - flight.frontal_overlap);

        if !(line_m > MIN_SPACING_M) || !(point_m > MIN_SPACING_M) {
            return Err(Error::InvalidSpacing(format!(
                "line spacing {line_m:.4}m / point spacing {point_m:.4}m below {MIN_SPACING_M}m floor"
            )));
        }

        Ok(Self {
            fov_width_m,
            fov_height_m,
            line_m,
            point_m,
        })
    }
}

/// A planned survey scan
///
/// A pure function of `(footprint, CameraSpec, FlightSpec)`: planning the
/// same inputs twice yields an identical result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Waypoints in flight order
    pub waypoints: Vec<Waypoint>,
    /// Number of scan lines flown (for polygons, each disjoint span counts
    /// as its own line)
    pub line_count: usize,
    /// Points per line for rectangle scans, total waypoints for polygon scans
    pub point_count: usize,
    pub fov_width_m: f64,
    pub fov_height_m: f64,
}

/// Plan a boustrophedon scan over a validated rectangle
///
/// Fails with [`Error::InvalidFootprint`] if the regularity test rejects the
/// corners and with [`Error::InvalidSpacing`] for degenerate overlap.
pub fn plan_rectangle(
    rect: &Rectangle,
    camera: &CameraSpec,
    flight: &FlightSpec,
) -> Result<ScanResult> {
    rect.validate()?;
    let spacing = Spacing::for_mission(camera, flight)?;

    let (track, line_count, point_count) = rectangle::scan(rect, &spacing);
    let waypoints = heading::annotate(&track, flight.altitude_m);

    Ok(ScanResult {
        waypoints,
        line_count,
        point_count,
        fov_width_m: spacing.fov_width_m,
        fov_height_m: spacing.fov_height_m,
    })
}

/// Plan a boustrophedon scan over an arbitrary simple polygon
///
/// Fails with [`Error::InvalidFootprint`] if the scanline sweep yields no
/// waypoints at all (e.g. a sliver polygon thinner than the filter epsilon).
pub fn plan_polygon(
    poly: &Polygon,
    camera: &CameraSpec,
    flight: &FlightSpec,
) -> Result<ScanResult> {
    let spacing = Spacing::for_mission(camera, flight)?;

    let (track, line_count) = polygon::scan(poly, &spacing);
    if track.is_empty() {
        return Err(Error::InvalidFootprint(
            "scan produced no waypoints (zero-span scan)".into(),
        ));
    }

    let point_count = track.len();
    let waypoints = heading::annotate(&track, flight.altitude_m);

    Ok(ScanResult {
        waypoints,
        line_count,
        point_count,
        fov_width_m: spacing.fov_width_m,
        fov_height_m: spacing.fov_height_m,
    })
}
