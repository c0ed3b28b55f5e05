//! parkmap - Declarative map content for theme park and public art viewers
//!
//! Loads park descriptors, attraction pins, routes and character sightings
//! from static JSON sources and assembles the overlays and annotations a
//! host renderer should draw for the currently selected map options.

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod options;
pub mod source;

#[cfg(test)]
mod testing;

pub use content::{ContentList, DrawableAnnotation, DrawableOverlay, MapSession, RebuildReport};
pub use error::MapError;
pub use options::{MapOption, MapOptionSelection};
