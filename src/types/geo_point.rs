/// Meters per degree of latitude (and of longitude at the equator)
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// A geographic position in decimal degrees
///
/// Immutable value type; equality is exact-float. Tolerances only appear in
/// the comparisons that document them (e.g. rectangle regularity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to another point in meters
    ///
    /// Equirectangular approximation: the latitude delta scales at 111 km per
    /// degree, the longitude delta additionally by the cosine of the mean
    /// latitude, combined via the Euclidean norm. Valid for survey-scale
    /// areas (up to a few kilometers); no ellipsoidal correction.
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let mean_lat = (self.latitude + other.latitude) / 2.0;
        let dx = (other.longitude - self.longitude) * METERS_PER_DEGREE * mean_lat.to_radians().cos();
        let dy = (other.latitude - self.latitude) * METERS_PER_DEGREE;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation in coordinate space
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`. The small-angle
    /// companion of [`distance_meters`](Self::distance_meters): straight in
    /// degree space, which matches the flat-Earth model used everywhere else.
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude + t * (other.latitude - self.latitude),
            longitude: self.longitude + t * (other.longitude - self.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_lt;

    #[test]
    fn one_millidegree_of_latitude_is_111_meters() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.001, 0.0);
        assert_eq!(a.distance_meters(&b), 111.0);
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let a = GeoPoint::new(60.0, 0.0);
        let b = GeoPoint::new(60.0, 0.001);
        // cos(60°) = 0.5
        let d = a.distance_meters(&b);
        assert_lt!((d - 55.5).abs(), 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(44.806, -0.605);
        let b = GeoPoint::new(44.807, -0.604);
        assert_eq!(a.distance_meters(&b), b.distance_meters(&a));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 26.0);

        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), GeoPoint::new(11.0, 23.0));
    }
}
