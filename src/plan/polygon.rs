//! Scanline-sweep boustrophedon scan across an arbitrary simple polygon

use crate::plan::Spacing;
use crate::types::{BoundingBox, GeoPoint, METERS_PER_DEGREE, Polygon};

/// Sweep the polygon with horizontal scan lines
///
/// Classic scanline fill: rows advance north from the bounding box's south
/// edge at the lateral line spacing (converted to a latitude step). Each row
/// collects the crossing longitude of every non-horizontal edge whose
/// latitude range straddles it, sorts them, and pairs them up
/// `(0,1), (2,3), …` into inside-spans; a trailing unpaired crossing from a
/// tangency is dropped. Span points are interpolated at the frontal point
/// spacing and re-checked against [`Polygon::contains`] to guard against
/// interpolation error at the span boundary.
///
/// Every processed span is its own serpentine line: it increments the
/// running line counter and is reversed when the counter was odd, even when
/// the membership re-check leaves it empty.
///
/// Returns the ordered track and the number of spans processed.
pub(crate) fn scan(poly: &Polygon, spacing: &Spacing) -> (Vec<GeoPoint>, usize) {
    let vertices = poly.vertices();
    // Polygon guarantees >= 3 vertices, so the bbox exists
    let Some(bbox) = BoundingBox::from_points(vertices) else {
        return (Vec::new(), 0);
    };

    let lat_step = spacing.line_m / METERS_PER_DEGREE;
    let n_rows = ((bbox.height_degrees() / lat_step).ceil() as usize).max(1) + 1;

    let mut track = Vec::new();
    let mut line_count = 0;

    for row in 0..n_rows {
        let lat = bbox.south + row as f64 * lat_step;
        if lat > bbox.north {
            break;
        }

        let crossings = row_crossings(vertices, lat);

        for pair in crossings.chunks_exact(2) {
            let start = GeoPoint::new(lat, pair[0]);
            let end = GeoPoint::new(lat, pair[1]);

            let span_m = start.distance_meters(&end);
            let n_points = ((span_m / spacing.point_m).ceil() as usize).max(1) + 1;

            let mut line: Vec<GeoPoint> = (0..n_points)
                .map(|m| start.lerp(&end, m as f64 / (n_points - 1) as f64))
                .filter(|point| poly.contains(point))
                .collect();

            if line_count % 2 == 1 {
                line.reverse();
            }

            track.extend(line);
            line_count += 1;
        }
    }

    (track, line_count)
}

/// Longitudes where the polygon boundary crosses the given latitude, sorted
/// ascending
///
/// An edge contributes when its latitude range contains the row latitude
/// (inclusive at both endpoints); horizontal edges contribute nothing. The
/// crossing longitude comes from linear interpolation along the edge.
fn row_crossings(vertices: &[GeoPoint], lat: f64) -> Vec<f64> {
    let mut crossings = Vec::new();

    for (i, p1) in vertices.iter().enumerate() {
        let p2 = &vertices[(i + 1) % vertices.len()];

        let straddles = (p1.latitude <= lat && lat <= p2.latitude)
            || (p2.latitude <= lat && lat <= p1.latitude);
        if straddles && p1.latitude != p2.latitude {
            let t = (lat - p1.latitude) / (p2.latitude - p1.latitude);
            crossings.push(p1.longitude + t * (p2.longitude - p1.longitude));
        }
    }

    crossings.sort_by(f64::total_cmp);
    crossings
}
