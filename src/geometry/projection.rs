use super::GeoPoint;

/// Width and height of the projected world, in map points.
///
/// Matches the 2^28 point square used by common slippy-map frameworks so
/// that rects produced here line up with what a host renderer expects.
pub const MAP_WORLD_SIZE: f64 = 268_435_456.0;

/// Latitude beyond which Web Mercator diverges; inputs are clamped to it.
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// A point in the flat, projected map space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in projected map space, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapRect {
    pub origin: MapPoint,
    pub width: f64,
    pub height: f64,
}

impl MapRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: MapPoint { x, y },
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.height
    }

    pub fn contains(&self, point: MapPoint) -> bool {
        (self.origin.x..=self.max_x()).contains(&point.x)
            && (self.origin.y..=self.max_y()).contains(&point.y)
    }
}

/// Project a geographic coordinate into map space
///
/// Spherical Web Mercator scaled to [`MAP_WORLD_SIZE`]:
/// - x grows eastward from the antimeridian
/// - y grows southward from the northern Mercator limit
pub fn project(point: GeoPoint) -> MapPoint {
    let lat = point
        .latitude
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();

    let x = (point.longitude + 180.0) / 360.0 * MAP_WORLD_SIZE;
    let merc = (lat.tan() + 1.0 / lat.cos()).ln();
    let y = (1.0 - merc / std::f64::consts::PI) / 2.0 * MAP_WORLD_SIZE;

    MapPoint { x, y }
}

/// Bounding rect of an overlay described by three of its corners
///
/// The origin is the projected top-left corner; width and height are the
/// absolute projected distances to the top-right and bottom-left corners.
pub fn bounding_rect(top_left: GeoPoint, top_right: GeoPoint, bottom_left: GeoPoint) -> MapRect {
    let tl = project(top_left);
    let tr = project(top_right);
    let bl = project(bottom_left);

    MapRect {
        origin: tl,
        width: (tl.x - tr.x).abs(),
        height: (tl.y - bl.y).abs(),
    }
}
