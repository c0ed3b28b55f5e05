use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{MapError, Result};
use crate::geometry::{GeoPoint, MapRect, MapRegion, bounding_rect};
use crate::source::DataSource;

const MID_COORD: &str = "midCoord";
const TOP_LEFT_COORD: &str = "overlayTopLeftCoord";
const TOP_RIGHT_COORD: &str = "overlayTopRightCoord";
const BOTTOM_LEFT_COORD: &str = "overlayBottomLeftCoord";
const BOUNDARY: &str = "boundary";

/// How [`load_park`] treats absent or unparseable required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkMode {
    /// Fail with [`MapError::MalformedPark`]
    Strict,
    /// Substitute zero coordinates (or an empty boundary) and log a warning
    #[default]
    Lenient,
}

/// A park: its boundary polygon and the corners of its overlay image
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Park {
    pub name: String,
    /// Closed polygon; first and last points need not repeat
    pub boundary: Vec<GeoPoint>,
    /// Taken from the data file, not computed from the boundary
    pub midpoint: GeoPoint,
    pub top_left: GeoPoint,
    pub top_right: GeoPoint,
    pub bottom_left: GeoPoint,
    /// Fields substituted with a zero or empty value by a lenient load
    pub degraded_fields: Vec<&'static str>,
}

impl Park {
    pub fn bottom_right(&self) -> GeoPoint {
        GeoPoint::new(self.bottom_left.latitude, self.top_right.longitude)
    }

    /// Projected rect covered by the overlay image
    pub fn overlay_bounding_rect(&self) -> MapRect {
        bounding_rect(self.top_left, self.top_right, self.bottom_left)
    }

    /// Whether a lenient load had to replace the boundary
    pub fn boundary_degraded(&self) -> bool {
        self.degraded_fields.contains(&BOUNDARY)
    }

    /// First overlay corner a lenient load had to zero-fill
    pub fn degraded_corner(&self) -> Option<&'static str> {
        [TOP_LEFT_COORD, TOP_RIGHT_COORD, BOTTOM_LEFT_COORD]
            .into_iter()
            .find(|field| self.degraded_fields.contains(field))
    }

    /// Initial viewport: centered on the midpoint, tall enough for the overlay
    pub fn initial_region(&self) -> MapRegion {
        let lat_delta = self.top_left.latitude - self.bottom_right().latitude;
        MapRegion::new(self.midpoint, lat_delta, 0.0)
    }
}

/// Load a park descriptor by source id
pub fn load_park(source: &dyn DataSource, id: &str, mode: ParkMode) -> Result<Park> {
    let value = source.load(id)?;
    let Value::Object(fields) = value else {
        return Err(MapError::MalformedSource {
            id: id.to_string(),
            expected: "a map of park fields",
        });
    };

    let mut reader = FieldReader {
        id,
        fields: &fields,
        mode,
        degraded: Vec::new(),
    };

    let boundary = reader.boundary()?;
    let midpoint = reader.coord(MID_COORD)?;
    let top_left = reader.coord(TOP_LEFT_COORD)?;
    let top_right = reader.coord(TOP_RIGHT_COORD)?;
    let bottom_left = reader.coord(BOTTOM_LEFT_COORD)?;

    Ok(Park {
        name: id.to_string(),
        boundary,
        midpoint,
        top_left,
        top_right,
        bottom_left,
        degraded_fields: reader.degraded,
    })
}

struct FieldReader<'a> {
    id: &'a str,
    fields: &'a Map<String, Value>,
    mode: ParkMode,
    degraded: Vec<&'static str>,
}

impl FieldReader<'_> {
    fn missing(&self, field: &str) -> MapError {
        MapError::MalformedPark {
            id: self.id.to_string(),
            field: field.to_string(),
        }
    }

    fn coord(&mut self, field: &'static str) -> Result<GeoPoint> {
        let parsed = self
            .fields
            .get(field)
            .and_then(Value::as_str)
            .map(GeoPoint::from_encoded);

        match (parsed, self.mode) {
            (Some(Ok(point)), _) => Ok(point),
            (_, ParkMode::Strict) => Err(self.missing(field)),
            (parsed, ParkMode::Lenient) => {
                let reason = match parsed {
                    Some(Err(e)) => e.to_string(),
                    _ => "field absent".to_string(),
                };
                warn!(source = self.id, field, %reason, "zero-filling park coordinate");
                self.degraded.push(field);
                Ok(GeoPoint::ZERO)
            }
        }
    }

    fn boundary(&mut self) -> Result<Vec<GeoPoint>> {
        let strings: Option<Vec<&str>> = self
            .fields
            .get(BOUNDARY)
            .and_then(Value::as_array)
            .and_then(|items| items.iter().map(Value::as_str).collect());

        let parsed = strings.map(|raw| crate::geometry::parse_points(&raw));

        match (parsed, self.mode) {
            (Some(Ok(points)), _) => Ok(points),
            (_, ParkMode::Strict) => Err(self.missing(BOUNDARY)),
            (_, ParkMode::Lenient) => {
                warn!(source = self.id, field = BOUNDARY, "park boundary unusable, leaving it empty");
                self.degraded.push(BOUNDARY);
                Ok(Vec::new())
            }
        }
    }
}
