use crate::types::GeoPoint;

/// How the drone passes through a waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnMode {
    /// Stop at the waypoint, then continue (used at the mission start)
    StopAndContinue,
    /// Fly through the waypoint on a continuous curvature
    PassAndContinue,
}

impl TurnMode {
    /// The `wpml:waypointTurnMode` value for this mode
    pub fn as_wpml(&self) -> &'static str {
        match self {
            TurnMode::StopAndContinue => "toPointAndStopWithContinuityCurvature",
            TurnMode::PassAndContinue => "toPointAndPassWithContinuityCurvature",
        }
    }
}

/// A single mission waypoint with its flight annotations
///
/// Produced only by the planners. The ordering of waypoints in the containing
/// sequence is the flight order and is significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: GeoPoint,
    /// Execute height above the start point in meters
    pub altitude_m: f64,
    /// Heading angle as written to `wpml:waypointHeadingAngle`; the planner
    /// emits -90 for eastbound and +90 for westbound travel
    pub heading_deg: f64,
    /// Whether the heading angle is enforced at this waypoint
    pub heading_enabled: bool,
    pub turn_mode: TurnMode,
}
