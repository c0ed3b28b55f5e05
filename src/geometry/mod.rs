pub mod point;
pub mod projection;
pub mod region;

pub use point::{GeoPoint, format_point, parse_point, parse_points};
pub use projection::{MapPoint, MapRect, bounding_rect, project};
pub use region::MapRegion;
