pub mod assembly;
pub mod drawable;
pub mod session;

pub use assembly::{
    ContentContext, ContentIds, LoadFailure, RebuildReport, artwork_content, rebuild_content,
};
pub use drawable::{ContentList, DrawableAnnotation, DrawableOverlay, ImageOverlay};
pub use session::MapSession;
