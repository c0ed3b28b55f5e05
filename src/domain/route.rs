use crate::error::Result;
use crate::geometry::{GeoPoint, parse_points};
use crate::source::{DataSource, load_string_list};

/// A connected walking path through the park
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub points: Vec<GeoPoint>,
}

impl Route {
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        self.points.iter().map(|&p| geo::Coord::from(p)).collect()
    }
}

pub fn load_route(source: &dyn DataSource, id: &str) -> Result<Route> {
    let raw = load_string_list(source, id)?;
    Ok(Route {
        name: id.to_string(),
        points: parse_points(&raw)?,
    })
}
