//! Grid-aligned boustrophedon scan across a quadrilateral

use crate::plan::Spacing;
use crate::types::{GeoPoint, Rectangle};

/// Sweep the rectangle with serpentine scan lines
///
/// `P0→P3` and `P1→P2` are the two length edges: the sweep interpolates
/// `Ny + 1` lines between them, where `Ny = max(1, ceil(|P0 P3| / line
/// spacing))`. Each line runs from its interpolated left endpoint to its
/// right endpoint with `Nx + 1` evenly spaced points, `Nx` recomputed from
/// that line's own length — line lengths vary across the skew the regularity
/// test admits. Odd-indexed lines are reversed.
///
/// Returns the ordered track, the line count (`Ny + 1`) and the point count
/// of the final line (`Nx + 1`).
pub(crate) fn scan(rect: &Rectangle, spacing: &Spacing) -> (Vec<GeoPoint>, usize, usize) {
    let [p0, p1, p2, p3] = rect.corners;

    let length_m = p0.distance_meters(&p3);
    let ny = ((length_m / spacing.line_m).ceil() as usize).max(1);

    let mut track = Vec::new();
    let mut points_per_line = 0;

    for iy in 0..=ny {
        let frac_y = iy as f64 / ny as f64;
        let left = p0.lerp(&p3, frac_y);
        let right = p1.lerp(&p2, frac_y);

        let line_m = left.distance_meters(&right);
        let nx = ((line_m / spacing.point_m).ceil() as usize).max(1);

        let mut line: Vec<GeoPoint> = (0..=nx)
            .map(|ix| left.lerp(&right, ix as f64 / nx as f64))
            .collect();

        if iy % 2 == 1 {
            line.reverse();
        }

        points_per_line = line.len();
        track.extend(line);
    }

    (track, ny + 1, points_per_line)
}
