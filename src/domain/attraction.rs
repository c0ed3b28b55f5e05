use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{MapError, Result};
use crate::geometry::GeoPoint;
use crate::source::DataSource;

/// Attraction category, ordinal-coded in source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttractionType {
    #[default]
    Misc = 0,
    Ride = 1,
    Food = 2,
    FirstAid = 3,
}

impl AttractionType {
    pub fn from_ordinal(ordinal: i64) -> Option<AttractionType> {
        match ordinal {
            0 => Some(AttractionType::Misc),
            1 => Some(AttractionType::Ride),
            2 => Some(AttractionType::Food),
            3 => Some(AttractionType::FirstAid),
            _ => None,
        }
    }

    /// Parse the string-encoded ordinal, falling back to `Misc`
    pub fn from_code(code: &str) -> AttractionType {
        code.trim()
            .parse()
            .ok()
            .and_then(AttractionType::from_ordinal)
            .unwrap_or_default()
    }

    /// Name of the pin icon asset for this type
    pub fn icon(&self) -> &'static str {
        match self {
            AttractionType::Misc => "star",
            AttractionType::Ride => "ride",
            AttractionType::Food => "food",
            AttractionType::FirstAid => "firstaid",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub coordinate: GeoPoint,
    pub title: String,
    pub subtitle: String,
    pub kind: AttractionType,
}

/// Load the attraction pins from an array of field maps
///
/// Every field is optional: a bad location becomes the zero coordinate,
/// missing text becomes empty, an unknown type becomes `Misc`. Entries that
/// are not maps are skipped.
pub fn load_attractions(source: &dyn DataSource, id: &str) -> Result<Vec<Attraction>> {
    let Value::Array(entries) = source.load(id)? else {
        return Err(MapError::MalformedSource {
            id: id.to_string(),
            expected: "an array of attraction maps",
        });
    };

    let mut attractions = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_object() else {
            warn!(source = id, index, "skipping attraction entry that is not a map");
            continue;
        };
        attractions.push(parse_attraction(id, index, fields));
    }

    Ok(attractions)
}

fn parse_attraction(id: &str, index: usize, fields: &Map<String, Value>) -> Attraction {
    let text = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let coordinate = match fields.get("location").and_then(Value::as_str) {
        Some(raw) => GeoPoint::from_encoded(raw).unwrap_or_else(|e| {
            warn!(source = id, index, error = %e, "attraction location unparseable, using zero");
            GeoPoint::ZERO
        }),
        None => {
            warn!(source = id, index, "attraction has no location, using zero");
            GeoPoint::ZERO
        }
    };

    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .map(AttractionType::from_code)
        .unwrap_or_default();

    Attraction {
        coordinate,
        title: text("name"),
        subtitle: text("subtitle"),
        kind,
    }
}
