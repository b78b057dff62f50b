use crate::error::{Error, Result};
use crate::types::GeoPoint;

/// Default tolerance for the rectangle regularity test
pub const RECTANGLE_TOLERANCE: f64 = 0.2;

/// Edge length in coordinate-delta units (degrees, not meters)
///
/// The regularity test compares opposite edges as ratios, so the unit
/// cancels; staying in degree space keeps the test independent of latitude.
fn edge_len(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = b.latitude - a.latitude;
    let d_lon = b.longitude - a.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// A quadrilateral ground footprint
///
/// Corners are ordered around the perimeter `P0, P1, P2, P3` such that
/// `P0-P1` and `P3-P2` are the two "width" edges (scan direction) and
/// `P0-P3`, `P1-P2` the two "length" edges (line advance direction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub corners: [GeoPoint; 4],
}

impl Rectangle {
    pub fn new(corners: [GeoPoint; 4]) -> Self {
        Self { corners }
    }

    /// Regularity check with the default 20% tolerance
    pub fn validate(&self) -> Result<()> {
        self.validate_with_tolerance(RECTANGLE_TOLERANCE)
    }

    /// Check that opposite edges have comparable lengths
    ///
    /// Computes the 4 consecutive edge lengths in coordinate-delta units and
    /// requires `|d0 - d2| / max(d0, d2) <= tolerance` and likewise for
    /// `(d1, d3)`. A pair of zero-length opposite edges is degenerate and
    /// fails outright.
    pub fn validate_with_tolerance(&self, tolerance: f64) -> Result<()> {
        let mut distances = [0.0; 4];
        for i in 0..4 {
            distances[i] = edge_len(&self.corners[i], &self.corners[(i + 1) % 4]);
        }

        for (d_a, d_b) in [(distances[0], distances[2]), (distances[1], distances[3])] {
            let max = d_a.max(d_b);
            if max == 0.0 {
                return Err(Error::InvalidFootprint(
                    "degenerate rectangle (zero-length opposite edges)".into(),
                ));
            }
            if (d_a - d_b).abs() / max > tolerance {
                return Err(Error::InvalidFootprint(
                    "corners do not form a regular rectangle".into(),
                ));
            }
        }

        Ok(())
    }
}

/// An arbitrary simple-polygon ground footprint
///
/// Vertices are ordered around the perimeter; the edge from the last vertex
/// back to the first is part of the boundary. Self-intersection is assumed
/// absent and not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Create a polygon from at least 3 vertices
    pub fn new(vertices: Vec<GeoPoint>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidFootprint(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Point-in-polygon membership by ray casting
    ///
    /// Casts a ray in the positive-longitude direction and counts
    /// boundary-edge crossings; odd parity means inside. An edge counts when
    /// `min(lat1, lat2) < lat <= max(lat1, lat2)` — the half-open rule that
    /// keeps a vertex shared by two edges from being counted twice.
    /// Horizontal edges never count (their latitude range is empty under
    /// that rule).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let mut inside = false;

        let n = self.vertices.len();
        let mut p1 = self.vertices[0];
        for i in 1..=n {
            let p2 = self.vertices[i % n];

            if point.latitude > p1.latitude.min(p2.latitude)
                && point.latitude <= p1.latitude.max(p2.latitude)
                && point.longitude <= p1.longitude.max(p2.longitude)
            {
                // the latitude range is non-empty here, so the edge is not
                // horizontal and the interpolation below cannot divide by zero
                let crossing = p1.longitude
                    + (point.latitude - p1.latitude) * (p2.longitude - p1.longitude)
                        / (p2.latitude - p1.latitude);
                if p1.longitude == p2.longitude || point.longitude <= crossing {
                    inside = !inside;
                }
            }

            p1 = p2;
        }

        inside
    }
}

/// Accumulates clicked points into a validated footprint
///
/// Owned by the UI layer: each map click appends a point, and once the shape
/// is complete [`try_rectangle`](Self::try_rectangle) or
/// [`try_polygon`](Self::try_polygon) produces the immutable footprint the
/// planners consume. The planners themselves never see partial state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FootprintBuilder {
    points: Vec<GeoPoint>,
}

impl FootprintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clicked point
    pub fn push(&mut self, point: GeoPoint) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Discard all accumulated points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close the shape as a rectangle
    ///
    /// Requires exactly 4 points and the regularity test to pass.
    pub fn try_rectangle(&self) -> Result<Rectangle> {
        let corners: [GeoPoint; 4] = self.points.as_slice().try_into().map_err(|_| {
            Error::InvalidFootprint(format!(
                "rectangle needs exactly 4 points, got {}",
                self.points.len()
            ))
        })?;

        let rectangle = Rectangle::new(corners);
        rectangle.validate()?;
        Ok(rectangle)
    }

    /// Close the shape as an arbitrary polygon
    ///
    /// Requires at least 3 points.
    pub fn try_polygon(&self) -> Result<Polygon> {
        Polygon::new(self.points.clone())
    }
}
