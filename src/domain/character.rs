use rand::RngCore;
use serde::Deserialize;

use crate::error::{MapError, Result};
use crate::geometry::{GeoPoint, parse_points};
use crate::source::{DataSource, load_string_list};

/// Number of candidate locations a character sample draws from
pub const SAMPLE_POINTS: usize = 4;
/// Radius floor in meters
pub const MIN_RADIUS: f64 = 5.0;
/// Exclusive upper bound of the raw radius draw
const RADIUS_MODULUS: u32 = 40;

/// Stroke color of a character circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Orange,
    Yellow,
    Green,
    Magenta,
    Red,
    Purple,
}

/// A character's location source and the color its circle is drawn in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterSource {
    pub source: String,
    pub color: Color,
}

impl CharacterSource {
    pub fn new(source: impl Into<String>, color: Color) -> Self {
        Self {
            source: source.into(),
            color,
        }
    }
}

/// A circular region where a character was last seen
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterOverlay {
    /// Id of the source the sample came from
    pub name: String,
    pub center: GeoPoint,
    /// Radius in meters, within [5, 39]
    pub radius: f64,
    pub color: Color,
}

/// Sample a character location from a list of candidate points
///
/// Consumes two `u32` draws from `rng`: the candidate index, then the
/// radius. Only the first four candidates are eligible. Every call yields a
/// fresh sample.
pub fn load_character_sample(
    source: &dyn DataSource,
    id: &str,
    color: Color,
    rng: &mut dyn RngCore,
) -> Result<CharacterOverlay> {
    let raw = load_string_list(source, id)?;
    if raw.len() < SAMPLE_POINTS {
        return Err(MapError::InsufficientSamplePoints {
            id: id.to_string(),
            found: raw.len(),
        });
    }

    let candidates = parse_points(&raw[..SAMPLE_POINTS])?;

    let index = rng.next_u32() as usize % SAMPLE_POINTS;
    let radius = MIN_RADIUS.max((rng.next_u32() % RADIUS_MODULUS) as f64);

    Ok(CharacterOverlay {
        name: id.to_string(),
        center: candidates[index],
        radius,
        color,
    })
}
