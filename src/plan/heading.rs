//! Heading and turn-mode assignment along a finished track

use crate::types::{GeoPoint, TurnMode, Waypoint};

/// Annotate an ordered track with headings, turn modes and the altitude
///
/// The first waypoint looks toward its successor, stops, and enforces its
/// heading; every other waypoint passes through on continuous curvature with
/// the heading merely suggested. Interior waypoints look toward their
/// successor, the last one keeps the direction of its final segment.
///
/// A single-point track (reachable when the polygon sweep filters a tangent
/// row down to one point) has no travel direction; it gets the default
/// heading with stop-and-enforce semantics.
pub(crate) fn annotate(track: &[GeoPoint], altitude_m: f64) -> Vec<Waypoint> {
    let n = track.len();

    if n == 1 {
        return vec![Waypoint {
            position: track[0],
            altitude_m,
            heading_deg: -90.0,
            heading_enabled: true,
            turn_mode: TurnMode::StopAndContinue,
        }];
    }

    track
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let (from, to, turn_mode, heading_enabled) = if i == 0 {
                (track[0], track[1], TurnMode::StopAndContinue, true)
            } else if i == n - 1 {
                (track[n - 2], track[n - 1], TurnMode::PassAndContinue, false)
            } else {
                (track[i], track[i + 1], TurnMode::PassAndContinue, false)
            };

            Waypoint {
                position,
                altitude_m,
                heading_deg: heading_deg(&from, &to),
                heading_enabled,
                turn_mode,
            }
        })
        .collect()
}

/// Heading for a travel direction
///
/// Predominantly east-west motion faces -90° eastbound and +90° westbound.
/// Predominantly north-south motion returns -90° regardless of sign — a
/// known asymmetry, deliberately kept (see DESIGN.md).
fn heading_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lon = to.longitude - from.longitude;
    let d_lat = to.latitude - from.latitude;

    if d_lon.abs() > d_lat.abs() {
        if d_lon > 0.0 { -90.0 } else { 90.0 }
    } else {
        -90.0
    }
}
