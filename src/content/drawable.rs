use geo::{LineString, Polygon};

use crate::domain::{Artwork, Attraction, CharacterOverlay, Park};
use crate::geometry::{GeoPoint, MapRect};
use crate::options::MapOption;

/// The park map image stretched over its overlay rect
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOverlay {
    pub bounding_rect: MapRect,
    /// Anchor coordinate, the park midpoint
    pub coordinate: GeoPoint,
    /// Image asset name
    pub image: String,
}

impl ImageOverlay {
    pub fn for_park(park: &Park, image: impl Into<String>) -> Self {
        Self {
            bounding_rect: park.overlay_bounding_rect(),
            coordinate: park.midpoint,
            image: image.into(),
        }
    }
}

/// A non-interactive region drawn on the map
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableOverlay {
    Boundary(Polygon<f64>),
    Image(ImageOverlay),
    Route(LineString<f64>),
    CharacterCircle(CharacterOverlay),
}

impl DrawableOverlay {
    /// The option that produces this overlay
    pub fn option(&self) -> MapOption {
        match self {
            DrawableOverlay::Boundary(_) => MapOption::Boundary,
            DrawableOverlay::Image(_) => MapOption::OverlayImage,
            DrawableOverlay::Route(_) => MapOption::Route,
            DrawableOverlay::CharacterCircle(_) => MapOption::CharacterLocation,
        }
    }
}

/// An interactive marker
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableAnnotation {
    Attraction(Attraction),
    Artwork(Artwork),
}

impl DrawableAnnotation {
    pub fn coordinate(&self) -> GeoPoint {
        match self {
            DrawableAnnotation::Attraction(a) => a.coordinate,
            DrawableAnnotation::Artwork(a) => a.coordinate,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DrawableAnnotation::Attraction(a) => &a.title,
            DrawableAnnotation::Artwork(a) => &a.title,
        }
    }

    pub fn subtitle(&self) -> &str {
        match self {
            DrawableAnnotation::Attraction(a) => &a.subtitle,
            DrawableAnnotation::Artwork(a) => a.subtitle(),
        }
    }

    /// Image asset the renderer should draw for this marker
    pub fn icon(&self) -> &'static str {
        match self {
            DrawableAnnotation::Attraction(a) => a.kind.icon(),
            DrawableAnnotation::Artwork(a) => a.glyph(),
        }
    }
}

/// Everything a renderer should display, in drawing order
///
/// Always rebuilt whole; hosts replace what they show rather than diffing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentList {
    pub overlays: Vec<DrawableOverlay>,
    pub annotations: Vec<DrawableAnnotation>,
}

impl ContentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty() && self.annotations.is_empty()
    }
}

/// Polygon over the park boundary; `geo` closes the ring
pub fn boundary_polygon(park: &Park) -> Polygon<f64> {
    let ring: LineString<f64> = park.boundary.iter().map(|&p| geo::Coord::from(p)).collect();
    Polygon::new(ring, Vec::new())
}
