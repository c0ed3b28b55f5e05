use serde::Deserialize;

/// A toggleable category of map content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapOption {
    Boundary,
    OverlayImage,
    Pins,
    CharacterLocation,
    Route,
}

impl MapOption {
    /// Options in the order they are listed to the user
    pub const ALL: [MapOption; 5] = [
        MapOption::Boundary,
        MapOption::OverlayImage,
        MapOption::Pins,
        MapOption::CharacterLocation,
        MapOption::Route,
    ];

    /// Order content is built in, which is also the drawing order
    pub const BUILD_ORDER: [MapOption; 5] = [
        MapOption::Boundary,
        MapOption::OverlayImage,
        MapOption::Pins,
        MapOption::Route,
        MapOption::CharacterLocation,
    ];

    pub fn from_index(index: usize) -> Option<MapOption> {
        Self::ALL.get(index).copied()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MapOption::Boundary => "Park Boundary",
            MapOption::OverlayImage => "Map Overlay",
            MapOption::Pins => "Attraction Pins",
            MapOption::CharacterLocation => "Character Location",
            MapOption::Route => "Route",
        }
    }
}

/// The set of enabled options, kept in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOptionSelection {
    options: Vec<MapOption>,
}

impl MapOptionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `option` if selected, otherwise append it
    pub fn toggle(&mut self, option: MapOption) {
        if let Some(pos) = self.options.iter().position(|&o| o == option) {
            self.options.remove(pos);
        } else {
            self.options.push(option);
        }
    }

    /// Owned variant of [`toggle`](Self::toggle)
    pub fn toggled(mut self, option: MapOption) -> Self {
        self.toggle(option);
        self
    }

    pub fn contains(&self, option: MapOption) -> bool {
        self.options.contains(&option)
    }

    pub fn iter(&self) -> impl Iterator<Item = MapOption> + '_ {
        self.options.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Same members, ignoring selection order
    pub fn same_members(&self, other: &MapOptionSelection) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}

impl FromIterator<MapOption> for MapOptionSelection {
    /// Duplicates keep their first position
    fn from_iter<I: IntoIterator<Item = MapOption>>(iter: I) -> Self {
        let mut selection = MapOptionSelection::new();
        for option in iter {
            if !selection.contains(option) {
                selection.options.push(option);
            }
        }
        selection
    }
}
