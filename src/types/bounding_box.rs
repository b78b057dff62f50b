use crate::types::GeoPoint;

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude
/// bounds. All coordinates are stored in decimal degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle
/// areas crossing the ±180° longitude line (anti-meridian). Simple min/max
/// logic is used, which will produce incorrect results for such regions. A
/// footprint crossing the anti-meridian yields a bounding box that
/// incorrectly spans nearly the entire globe instead of the actual smaller
/// region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,  // west longitude (degrees)
    pub north: f64, // north latitude (degrees)
    pub east: f64,  // east longitude (degrees)
    pub south: f64, // south latitude (degrees)
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bbox = Self::from(points[0]);
        for &point in &points[1..] {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Grows the bounding box if necessary to encompass the given point.
    /// If the point is already inside the bbox, no change is made.
    pub fn extend(&mut self, point: GeoPoint) {
        self.west = self.west.min(point.longitude);
        self.east = self.east.max(point.longitude);
        self.north = self.north.max(point.latitude);
        self.south = self.south.min(point.latitude);
    }

    /// Latitude span in degrees
    pub fn height_degrees(&self) -> f64 {
        self.north - self.south
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            west: point.longitude,
            north: point.latitude,
            east: point.longitude,
            south: point.latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_none;

    #[test]
    fn test_from_point() {
        let point = GeoPoint::new(48.8566, 2.3522);

        let bbox = BoundingBox::from(point);

        // All bounds should equal the point's coordinates
        assert_eq!(bbox.west, 2.3522);
        assert_eq!(bbox.north, 48.8566);
        assert_eq!(bbox.east, 2.3522);
        assert_eq!(bbox.south, 48.8566);
        assert_eq!(bbox.height_degrees(), 0.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<GeoPoint> = vec![];
        let bbox = BoundingBox::from_points(&points);
        assert_none!(bbox);
    }

    #[test]
    fn test_from_points_multiple() {
        let points = vec![
            GeoPoint::new(0.5, 0.5), // Center
            GeoPoint::new(0.8, 0.2), // North + West
            GeoPoint::new(0.2, 0.9), // South + East
            GeoPoint::new(0.9, 0.1), // North + West
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bbox.west, 0.1); // Westmost
        assert_eq!(bbox.north, 0.9); // Northmost
        assert_eq!(bbox.east, 0.9); // Eastmost
        assert_eq!(bbox.south, 0.2); // Southmost
    }

    #[test]
    fn test_extend_multiple_directions() {
        let mut bbox = BoundingBox::from(GeoPoint::new(0.5, 0.5));

        bbox.extend(GeoPoint::new(0.8, 0.8)); // NE
        bbox.extend(GeoPoint::new(0.2, 0.2)); // SW
        bbox.extend(GeoPoint::new(0.9, 0.1)); // NW

        assert_eq!(bbox.west, 0.1);
        assert_eq!(bbox.north, 0.9);
        assert_eq!(bbox.east, 0.8);
        assert_eq!(bbox.south, 0.2);
        assert_eq!(bbox.height_degrees(), 0.7);
    }

    #[test]
    fn test_extend_with_point_inside_bbox() {
        let mut bbox = BoundingBox {
            west: 0.0,
            north: 1.0,
            east: 1.0,
            south: 0.0,
        };

        // Extend with point inside - should not change bounds
        bbox.extend(GeoPoint::new(0.5, 0.5));

        assert_eq!(bbox.west, 0.0);
        assert_eq!(bbox.north, 1.0);
        assert_eq!(bbox.east, 1.0);
        assert_eq!(bbox.south, 0.0);
    }
}
