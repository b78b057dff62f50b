//! High-level mission writer with builder API

use crate::error::{Error, Result};
use crate::plan::ScanResult;
use crate::types::Waypoint;
use crate::wpml::{self, MissionParams};

/// Default transitional/waypoint speed in m/s
const DEFAULT_SPEED_MPS: f64 = 2.5;

/// Default gimbal pitch in degrees (-90 straight down, 0 horizontal)
const DEFAULT_GIMBAL_PITCH_DEG: f64 = -45.0;

/// Default mission author string expected by the consumers
const DEFAULT_AUTHOR: &str = "fly";

/// High-level WPML mission writer with builder API
///
/// Renders a planned scan into the two documents of a WPMZ mission archive.
/// Zipping them under [`wpml::TEMPLATE_PATH`] and [`wpml::WAYLINES_PATH`] is
/// the caller's plumbing.
///
/// # Example
///
/// ```
/// use survey_wpml::MissionWriter;
///
/// MissionWriter::from_waypoints(Vec::new());
/// ```
pub struct MissionWriter {
    waypoints: Vec<Waypoint>,
    speed_mps: f64,
    gimbal_pitch_deg: f64,
    author: String,
    timestamp_ms: i64,
}

impl MissionWriter {
    /// Create a writer for a planned scan
    ///
    /// Defaults: speed 2.5 m/s, gimbal pitch -45°, author "fly", and the
    /// current time as create/update timestamp.
    pub fn new(scan: &ScanResult) -> Self {
        Self::from_waypoints(scan.waypoints.clone())
    }

    /// Create a writer from a raw waypoint sequence
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            speed_mps: DEFAULT_SPEED_MPS,
            gimbal_pitch_deg: DEFAULT_GIMBAL_PITCH_DEG,
            author: DEFAULT_AUTHOR.into(),
            timestamp_ms: jiff::Timestamp::now().as_millisecond(),
        }
    }

    /// Set the transitional/waypoint speed in m/s (1 to 15)
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_speed(&mut self, speed_mps: f64) -> &mut Self {
        self.speed_mps = speed_mps;
        self
    }

    /// Set the gimbal pitch in degrees (-90 straight down to 0 horizontal)
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_gimbal_pitch(&mut self, gimbal_pitch_deg: f64) -> &mut Self {
        self.gimbal_pitch_deg = gimbal_pitch_deg;
        self
    }

    /// Override the author string
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn with_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    /// Override the create/update timestamp (epoch milliseconds)
    ///
    /// Useful for reproducible output. Returns `&mut self` to allow method
    /// chaining.
    pub fn with_timestamp_ms(&mut self, timestamp_ms: i64) -> &mut Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Render both mission documents
    ///
    /// Fails with [`Error::InputOutOfRange`] when speed or gimbal pitch are
    /// outside their documented bounds, and with [`Error::InvalidFootprint`]
    /// for an empty waypoint sequence. Rendering the same writer twice
    /// yields byte-identical documents.
    pub fn render(&self) -> Result<MissionDocuments> {
        if !(1.0..=15.0).contains(&self.speed_mps) {
            return Err(Error::InputOutOfRange {
                field: "speed_mps",
                value: self.speed_mps,
                expected: "in [1, 15]",
            });
        }
        if !(-90.0..=0.0).contains(&self.gimbal_pitch_deg) {
            return Err(Error::InputOutOfRange {
                field: "gimbal_pitch_deg",
                value: self.gimbal_pitch_deg,
                expected: "in [-90, 0]",
            });
        }
        if self.waypoints.is_empty() {
            return Err(Error::InvalidFootprint("empty mission".into()));
        }

        let params = MissionParams {
            author: &self.author,
            timestamp_ms: self.timestamp_ms,
            speed_mps: self.speed_mps,
            gimbal_pitch_deg: self.gimbal_pitch_deg,
            waypoints: &self.waypoints,
        };

        Ok(MissionDocuments {
            template_kml: wpml::render_template(&params)?,
            waylines_wpml: wpml::render_waylines(&params)?,
        })
    }
}

/// The rendered contents of a WPMZ mission archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionDocuments {
    /// Bytes destined for `wpmz/template.kml`
    pub template_kml: Vec<u8>,
    /// Bytes destined for `wpmz/waylines.wpml`
    pub waylines_wpml: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeoPoint, TurnMode};
    use claims::{assert_err, assert_ok};

    fn waypoint(latitude: f64, longitude: f64) -> Waypoint {
        Waypoint {
            position: GeoPoint::new(latitude, longitude),
            altitude_m: 50.0,
            heading_deg: -90.0,
            heading_enabled: false,
            turn_mode: TurnMode::PassAndContinue,
        }
    }

    #[test]
    fn render_rejects_out_of_range_speed() {
        let mut writer = MissionWriter::from_waypoints(vec![waypoint(0.0, 0.0)]);
        writer.with_speed(0.5);
        assert_err!(writer.render());

        writer.with_speed(15.5);
        assert_err!(writer.render());

        writer.with_speed(15.0);
        assert_ok!(writer.render());
    }

    #[test]
    fn render_rejects_out_of_range_gimbal_pitch() {
        let mut writer = MissionWriter::from_waypoints(vec![waypoint(0.0, 0.0)]);
        writer.with_gimbal_pitch(10.0);
        assert_err!(writer.render());

        writer.with_gimbal_pitch(-95.0);
        assert_err!(writer.render());

        writer.with_gimbal_pitch(-90.0);
        assert_ok!(writer.render());
    }

    #[test]
    fn render_rejects_empty_mission() {
        let writer = MissionWriter::from_waypoints(Vec::new());
        assert_err!(writer.render());
    }

    #[test]
    fn render_is_stable_across_calls() {
        let mut writer = MissionWriter::from_waypoints(vec![waypoint(0.0, 0.0), waypoint(0.0, 0.001)]);
        writer.with_timestamp_ms(1_700_000_000_000);

        let first = writer.render().unwrap();
        let second = writer.render().unwrap();
        assert_eq!(first, second);
    }
}
