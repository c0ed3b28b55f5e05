use serde_json::Value;
use tracing::warn;

use crate::error::{MapError, Result};
use crate::geometry::GeoPoint;
use crate::source::DataSource;

/// Column positions in a public art data row
mod column {
    pub const LOCATION_NAME: usize = 11;
    pub const DISCIPLINE: usize = 15;
    pub const TITLE: usize = 16;
    pub const LATITUDE: usize = 18;
    pub const LONGITUDE: usize = 19;
}

/// A piece of public art shown as a map marker
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub title: String,
    pub location_name: String,
    pub discipline: String,
    pub coordinate: GeoPoint,
}

impl Artwork {
    pub fn subtitle(&self) -> &str {
        &self.location_name
    }

    /// Marker glyph asset for this artwork's discipline
    pub fn glyph(&self) -> &'static str {
        if self.discipline == "Sculpture" {
            "Statue"
        } else {
            "Flag"
        }
    }

    fn from_row(row: &[Value]) -> Option<Artwork> {
        let text = |i: usize| row.get(i).and_then(Value::as_str);
        let degrees = |i: usize| text(i).and_then(|s| s.trim().parse::<f64>().ok());

        let title = text(column::TITLE).unwrap_or("No Title").to_string();
        let location_name = text(column::LOCATION_NAME)?.to_string();
        let discipline = text(column::DISCIPLINE)?.to_string();

        let coordinate = match (degrees(column::LATITUDE), degrees(column::LONGITUDE)) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
            _ => GeoPoint::ZERO,
        };

        Some(Artwork {
            title,
            location_name,
            discipline,
            coordinate,
        })
    }
}

/// Load artworks from a `{ "data": [[...], ...] }` document
///
/// Rows lacking a location name or discipline are skipped.
pub fn load_artworks(source: &dyn DataSource, id: &str) -> Result<Vec<Artwork>> {
    let malformed = || MapError::MalformedSource {
        id: id.to_string(),
        expected: "a map with a `data` array of rows",
    };

    let document = source.load(id)?;
    let rows = document
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(malformed)?;

    let mut artworks = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row.as_array().and_then(|cells| Artwork::from_row(cells)) {
            Some(artwork) => artworks.push(artwork),
            None => warn!(source = id, index, "skipping incomplete artwork row"),
        }
    }

    Ok(artworks)
}
