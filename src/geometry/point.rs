use crate::error::{MapError, Result};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const ZERO: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Decode a `{lat, lon}` string; the first component is the latitude.
    pub fn from_encoded(raw: &str) -> Result<Self> {
        let (x, y) = parse_point(raw)?;
        Ok(Self::new(x, y))
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::coord! { x: point.longitude, y: point.latitude }
    }
}

/// Parse a `"{x, y}"` encoded pair
///
/// Whitespace around the braces and components is ignored. Anything other
/// than exactly two finite numeric components is rejected.
pub fn parse_point(raw: &str) -> Result<(f64, f64)> {
    let malformed = || MapError::Parse {
        raw: raw.to_string(),
    };

    let inner = raw
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(malformed)?;

    let mut parts = inner.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let x: f64 = x.trim().parse().map_err(|_| malformed())?;
    let y: f64 = y.trim().parse().map_err(|_| malformed())?;

    if !x.is_finite() || !y.is_finite() {
        return Err(malformed());
    }

    Ok((x, y))
}

/// Encode a pair in the form accepted by [`parse_point`]
pub fn format_point(x: f64, y: f64) -> String {
    format!("{{{}, {}}}", x, y)
}

/// Decode every string in a list, failing on the first malformed entry
pub fn parse_points<S: AsRef<str>>(raw: &[S]) -> Result<Vec<GeoPoint>> {
    raw.iter().map(|s| GeoPoint::from_encoded(s.as_ref())).collect()
}
