pub mod artwork;
pub mod attraction;
pub mod character;
pub mod park;
pub mod route;

pub use artwork::{Artwork, load_artworks};
pub use attraction::{Attraction, AttractionType, load_attractions};
pub use character::{CharacterOverlay, CharacterSource, Color, load_character_sample};
pub use park::{Park, ParkMode, load_park};
pub use route::{Route, load_route};
