use rand::RngCore;
use tracing::{debug, warn};

use super::drawable::{ContentList, DrawableAnnotation, DrawableOverlay, ImageOverlay, boundary_polygon};
use crate::domain::{
    CharacterSource, Park, load_artworks, load_attractions, load_character_sample, load_route,
};
use crate::error::{MapError, Result};
use crate::options::{MapOption, MapOptionSelection};
use crate::source::DataSource;

/// Source ids and assets the loaders read from
#[derive(Debug, Clone, PartialEq)]
pub struct ContentIds {
    pub attractions: String,
    pub route: String,
    pub overlay_image: String,
    pub characters: Vec<CharacterSource>,
}

/// A loader that failed during a rebuild
#[derive(Debug)]
pub struct LoadFailure {
    pub option: MapOption,
    pub source_id: String,
    pub error: MapError,
}

/// Per-category failures from one rebuild
#[derive(Debug, Default)]
pub struct RebuildReport {
    pub failures: Vec<LoadFailure>,
}

impl RebuildReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_options(&self) -> impl Iterator<Item = MapOption> + '_ {
        self.failures.iter().map(|f| f.option)
    }

    fn record(&mut self, option: MapOption, source_id: &str, error: MapError) {
        warn!(?option, source = source_id, %error, "map content failed to load");
        self.failures.push(LoadFailure {
            option,
            source_id: source_id.to_string(),
            error,
        });
    }
}

/// Everything the pipeline needs besides the selection
pub struct ContentContext<'a> {
    pub park: &'a Park,
    pub ids: &'a ContentIds,
    pub source: &'a dyn DataSource,
    pub rng: &'a mut dyn RngCore,
}

/// Build the content list for a selection
///
/// Categories run in [`MapOption::BUILD_ORDER`], regardless of the order they
/// were selected in. A failing loader never stops the remaining categories;
/// its error lands in the returned report.
pub fn rebuild_content(
    selection: &MapOptionSelection,
    ctx: ContentContext<'_>,
) -> (ContentList, RebuildReport) {
    let mut content = ContentList::new();
    let mut report = RebuildReport::default();

    for option in MapOption::BUILD_ORDER {
        if !selection.contains(option) {
            continue;
        }

        match option {
            MapOption::Boundary => {
                if ctx.park.boundary_degraded() {
                    report.record(option, &ctx.park.name, degraded_park(ctx.park, "boundary"));
                } else if ctx.park.boundary.is_empty() {
                    debug!(park = %ctx.park.name, "park has no boundary points, nothing to draw");
                } else {
                    content
                        .overlays
                        .push(DrawableOverlay::Boundary(boundary_polygon(ctx.park)));
                }
            }
            MapOption::OverlayImage => match ctx.park.degraded_corner() {
                Some(field) => report.record(option, &ctx.park.name, degraded_park(ctx.park, field)),
                None => content.overlays.push(DrawableOverlay::Image(ImageOverlay::for_park(
                    ctx.park,
                    ctx.ids.overlay_image.as_str(),
                ))),
            },
            MapOption::Pins => match load_attractions(ctx.source, &ctx.ids.attractions) {
                Ok(attractions) => content
                    .annotations
                    .extend(attractions.into_iter().map(DrawableAnnotation::Attraction)),
                Err(e) => report.record(option, &ctx.ids.attractions, e),
            },
            MapOption::Route => match load_route(ctx.source, &ctx.ids.route) {
                Ok(route) => content
                    .overlays
                    .push(DrawableOverlay::Route(route.to_line_string())),
                Err(e) => report.record(option, &ctx.ids.route, e),
            },
            MapOption::CharacterLocation => {
                for character in &ctx.ids.characters {
                    match load_character_sample(
                        ctx.source,
                        &character.source,
                        character.color,
                        &mut *ctx.rng,
                    ) {
                        Ok(overlay) => content
                            .overlays
                            .push(DrawableOverlay::CharacterCircle(overlay)),
                        Err(e) => report.record(option, &character.source, e),
                    }
                }
            }
        }
    }

    debug!(
        overlays = content.overlays.len(),
        annotations = content.annotations.len(),
        failures = report.failures.len(),
        "rebuilt map content"
    );

    (content, report)
}

/// Lenient park loads zero-fill required fields; surface them per category
fn degraded_park(park: &Park, field: &str) -> MapError {
    MapError::MalformedPark {
        id: park.name.clone(),
        field: field.to_string(),
    }
}

/// Content list of public art markers
pub fn artwork_content(source: &dyn DataSource, id: &str) -> Result<ContentList> {
    let artworks = load_artworks(source, id)?;
    Ok(ContentList {
        overlays: Vec::new(),
        annotations: artworks.into_iter().map(DrawableAnnotation::Artwork).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttractionType, Color, ParkMode, load_park};
    use crate::geometry::GeoPoint;
    use crate::source::MemorySource;
    use crate::testing::{ScriptedRng, magic_mountain_source};
    use serde_json::json;

    fn ids() -> ContentIds {
        ContentIds {
            attractions: "MagicMountainAttractions".to_string(),
            route: "EntranceToGoliathRoute".to_string(),
            overlay_image: "overlay_park".to_string(),
            characters: vec![
                CharacterSource::new("BatmanLocations", Color::Blue),
                CharacterSource::new("TazLocations", Color::Orange),
                CharacterSource::new("TweetyBirdLocations", Color::Yellow),
            ],
        }
    }

    fn build(source: &MemorySource, selection: &MapOptionSelection) -> (ContentList, RebuildReport) {
        let park = load_park(source, "MagicMountain", ParkMode::Strict).unwrap();
        let ids = ids();
        let mut rng = ScriptedRng::new(&[1, 20]);
        rebuild_content(
            selection,
            ContentContext {
                park: &park,
                ids: &ids,
                source,
                rng: &mut rng,
            },
        )
    }

    fn select(options: &[MapOption]) -> MapOptionSelection {
        options.iter().copied().collect()
    }

    #[test]
    fn test_empty_selection_builds_nothing() {
        let (content, report) = build(&magic_mountain_source(), &MapOptionSelection::new());
        assert!(content.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_pins_only() {
        let (content, report) = build(&magic_mountain_source(), &select(&[MapOption::Pins]));

        assert!(report.is_clean());
        assert!(content.overlays.is_empty());
        assert_eq!(content.annotations.len(), 1);

        let DrawableAnnotation::Attraction(pin) = &content.annotations[0] else {
            panic!("expected an attraction");
        };
        assert_eq!(pin.coordinate, GeoPoint::new(10.0, 20.0));
        assert_eq!(pin.title, "Goliath");
        assert_eq!(pin.subtitle, "Coaster");
        assert_eq!(pin.kind, AttractionType::Ride);
    }

    #[test]
    fn test_fixed_build_order() {
        let selection = select(&[MapOption::Route, MapOption::Boundary, MapOption::Pins]);
        let (content, _) = build(&magic_mountain_source(), &selection);

        let order: Vec<MapOption> = content.overlays.iter().map(|o| o.option()).collect();
        assert_eq!(order, vec![MapOption::Boundary, MapOption::Route]);
        assert_eq!(content.annotations.len(), 1);
    }

    #[test]
    fn test_everything_selected() {
        let selection = select(&[
            MapOption::CharacterLocation,
            MapOption::Route,
            MapOption::OverlayImage,
            MapOption::Pins,
            MapOption::Boundary,
        ]);
        let (content, report) = build(&magic_mountain_source(), &selection);

        assert!(report.is_clean());
        let order: Vec<MapOption> = content.overlays.iter().map(|o| o.option()).collect();
        assert_eq!(
            order,
            vec![
                MapOption::Boundary,
                MapOption::OverlayImage,
                MapOption::Route,
                MapOption::CharacterLocation,
                MapOption::CharacterLocation,
                MapOption::CharacterLocation,
            ]
        );

        // Scripted draws [1, 20] repeat for every character
        for overlay in &content.overlays[3..] {
            let DrawableOverlay::CharacterCircle(c) = overlay else {
                panic!("expected a character circle");
            };
            assert_eq!(c.radius, 20.0);
        }
    }

    #[test]
    fn test_failures_do_not_block_other_categories() {
        let source = magic_mountain_source()
            .with("TazLocations", json!(["{1, 2}"]))
            .with("EntranceToGoliathRoute", json!(["{1, 2}", "bad"]));
        let selection = select(&[MapOption::CharacterLocation, MapOption::Route, MapOption::Pins]);

        let (content, report) = build(&source, &selection);

        assert_eq!(report.failures.len(), 2);
        assert_eq!(
            report.failed_options().collect::<Vec<_>>(),
            vec![MapOption::Route, MapOption::CharacterLocation]
        );
        assert!(matches!(
            report.failures[1].error,
            MapError::InsufficientSamplePoints { found: 1, .. }
        ));
        assert_eq!(report.failures[1].source_id, "TazLocations");

        // Pins plus the two healthy characters still made it
        assert_eq!(content.annotations.len(), 1);
        assert_eq!(content.overlays.len(), 2);
    }

    #[test]
    fn test_missing_source_is_reported() {
        let mut source = magic_mountain_source();
        source.insert("MagicMountainAttractions", json!("not a list"));
        let (content, report) = build(&source, &select(&[MapOption::Pins]));

        assert!(content.is_empty());
        assert!(matches!(
            report.failures[0].error,
            MapError::MalformedSource { .. }
        ));
    }

    fn build_lenient(
        park: serde_json::Value,
        selection: &MapOptionSelection,
    ) -> (ContentList, RebuildReport) {
        let source = magic_mountain_source().with("MagicMountain", park);
        let park = load_park(&source, "MagicMountain", ParkMode::Lenient).unwrap();
        let ids = ids();
        let mut rng = ScriptedRng::new(&[0]);
        rebuild_content(
            selection,
            ContentContext {
                park: &park,
                ids: &ids,
                source: &source,
                rng: &mut rng,
            },
        )
    }

    #[test]
    fn test_zero_filled_boundary_is_reported() {
        let park = json!({
            "midCoord": "{34.4248, -118.5971}",
            "overlayTopLeftCoord": "{34.4311, -118.6012}",
            "overlayTopRightCoord": "{34.4311, -118.5912}",
            "overlayBottomLeftCoord": "{34.4194, -118.6012}",
            "boundary": ["{1, 2}", "bad"]
        });
        let selection = select(&[MapOption::Boundary, MapOption::OverlayImage]);

        let (content, report) = build_lenient(park, &selection);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].option, MapOption::Boundary);
        assert_eq!(report.failures[0].source_id, "MagicMountain");
        assert!(matches!(
            &report.failures[0].error,
            MapError::MalformedPark { field, .. } if field == "boundary"
        ));
        // The image still draws from intact corners
        assert!(matches!(content.overlays[..], [DrawableOverlay::Image(_)]));
    }

    #[test]
    fn test_zero_filled_corner_drops_image() {
        let park = json!({
            "midCoord": "{34.4248, -118.5971}",
            "overlayTopLeftCoord": "{34.4311, -118.6012}",
            "overlayBottomLeftCoord": "not a point",
            "boundary": ["{34.4313, -118.5990}", "{34.4275, -118.5918}", "{34.4200, -118.5950}"]
        });
        let selection = select(&[MapOption::OverlayImage, MapOption::Boundary, MapOption::Pins]);

        let (content, report) = build_lenient(park, &selection);

        assert_eq!(
            report.failed_options().collect::<Vec<_>>(),
            vec![MapOption::OverlayImage]
        );
        assert!(matches!(
            &report.failures[0].error,
            MapError::MalformedPark { field, .. } if field == "overlayTopRightCoord"
        ));
        assert!(matches!(content.overlays[..], [DrawableOverlay::Boundary(_)]));
        assert_eq!(content.annotations.len(), 1);
    }

    #[test]
    fn test_degraded_park_reports_both_categories() {
        let park = json!({ "boundary": ["{1, 2}", "bad"] });
        let selection = select(&[MapOption::OverlayImage, MapOption::Boundary]);

        let (content, report) = build_lenient(park, &selection);

        assert!(content.overlays.is_empty());
        assert!(!report.is_clean());
        assert_eq!(
            report.failed_options().collect::<Vec<_>>(),
            vec![MapOption::Boundary, MapOption::OverlayImage]
        );
        let fields: Vec<&str> = report
            .failures
            .iter()
            .map(|f| match &f.error {
                MapError::MalformedPark { field, .. } => field.as_str(),
                other => panic!("unexpected error: {:?}", other),
            })
            .collect();
        assert_eq!(fields, vec!["boundary", "overlayTopLeftCoord"]);
    }

    #[test]
    fn test_artwork_content() {
        let mut row = vec![serde_json::Value::Null; 20];
        row[11] = json!("Kapiolani Park");
        row[15] = json!("Sculpture");
        row[16] = json!("Duke");
        row[18] = json!("21.27");
        row[19] = json!("-157.82");
        let source = MemorySource::new().with("PublicArt", json!({ "data": [row] }));

        let content = artwork_content(&source, "PublicArt").unwrap();
        assert!(content.overlays.is_empty());
        assert_eq!(content.annotations.len(), 1);
        assert_eq!(content.annotations[0].icon(), "Statue");
        assert_eq!(content.annotations[0].subtitle(), "Kapiolani Park");
    }
}
