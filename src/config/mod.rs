use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::content::ContentIds;
use crate::domain::{CharacterSource, Color, ParkMode};
use crate::options::MapOption;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_park() -> String {
    "MagicMountain".to_string()
}
fn default_attractions() -> String {
    "MagicMountainAttractions".to_string()
}
fn default_route() -> String {
    "EntranceToGoliathRoute".to_string()
}
fn default_overlay_image() -> String {
    "overlay_park".to_string()
}
fn default_characters() -> Vec<CharacterSource> {
    vec![
        CharacterSource::new("BatmanLocations", Color::Blue),
        CharacterSource::new("TazLocations", Color::Orange),
        CharacterSource::new("TweetyBirdLocations", Color::Yellow),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Directory holding `<source id>.json` files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_park")]
    pub park: String,
    #[serde(default = "default_attractions")]
    pub attractions: String,
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default = "default_overlay_image")]
    pub overlay_image: String,
    #[serde(default = "default_characters")]
    pub characters: Vec<CharacterSource>,
    #[serde(default)]
    pub park_mode: ParkMode,
    /// Fixed seed for character sampling; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Keep parsed sources in memory after first load
    #[serde(default)]
    pub cache_sources: bool,
    /// Options enabled when a session opens, e.g. `["boundary", "pins"]`
    #[serde(default)]
    pub initial_selection: Vec<MapOption>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            park: default_park(),
            attractions: default_attractions(),
            route: default_route(),
            overlay_image: default_overlay_image(),
            characters: default_characters(),
            park_mode: ParkMode::default(),
            seed: None,
            cache_sources: false,
            initial_selection: Vec::new(),
        }
    }
}

impl FileConfig {
    /// Load the first readable, well-formed config from the search path
    pub fn load() -> Option<Self> {
        Self::load_from(get_config_paths())
    }

    /// Load the first readable, well-formed config among `paths`
    pub fn load_from(paths: impl IntoIterator<Item = PathBuf>) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Load an explicit config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn content_ids(&self) -> ContentIds {
        ContentIds {
            attractions: self.attractions.clone(),
            route: self.route.clone(),
            overlay_image: self.overlay_image.clone(),
            characters: self.characters.clone(),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkmap.toml"));
    paths.push(PathBuf::from(".parkmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkmap").join("config.toml"));
        paths.push(config_dir.join("parkmap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkmap.toml"));
        paths.push(home.join(".config").join("parkmap").join("config.toml"));
    }

    paths
}
