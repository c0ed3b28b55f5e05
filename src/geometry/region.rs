use super::GeoPoint;

/// Meters per degree of latitude (and of longitude at the equator)
const METERS_PER_DEGREE: f64 = 111_320.0;

/// A visible map region: a center plus a span in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn new(center: GeoPoint, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta: latitude_delta.abs(),
            longitude_delta: longitude_delta.abs(),
        }
    }

    /// Region spanning `distance_m` meters north-south and east-west
    ///
    /// Uses the flat approximation: longitude degrees shrink with cos(lat).
    pub fn around(center: GeoPoint, distance_m: f64) -> Self {
        let latitude_delta = distance_m / METERS_PER_DEGREE;
        let cos_lat = center.latitude.to_radians().cos();
        let longitude_delta = if cos_lat > f64::EPSILON {
            distance_m / (METERS_PER_DEGREE * cos_lat)
        } else {
            360.0
        };

        Self::new(center, latitude_delta, longitude_delta.min(360.0))
    }
}
