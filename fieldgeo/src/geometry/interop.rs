//! Conversions into `geo-types`, for callers that need exact geodesic algorithms from the `geo` ecosystem.
//! `geo-types` uses `x = longitude` and `y = latitude`.

use crate::geometry::primitives::{Point, Polygon};

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.lng(), p.lat())
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point(p.y(), p.x())
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(poly: &Polygon) -> Self {
        let exterior = poly
            .vertices()
            .iter()
            .map(|p| geo_types::Coord { x: p.lng(), y: p.lat() })
            .collect::<Vec<_>>();
        //LineString::from closes the ring when the polygon is constructed
        geo_types::Polygon::new(geo_types::LineString::from(exterior), vec![])
    }
}
