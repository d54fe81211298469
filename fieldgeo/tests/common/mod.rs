#![allow(dead_code)]

use fieldgeo::entities::Field;
use fieldgeo::geometry::Geometry;
use fieldgeo::geometry::geo_enums::DrawType;
use fieldgeo::geometry::primitives::{GeoCircle, Point, Polygon};

/// Axis-aligned square polygon field, `size` degrees wide, south-west corner at (lat, lng)
pub fn square_field(id: i64, lat: f64, lng: f64, size: f64) -> Field {
    Field::new(
        id,
        Some(format!("square {id}")),
        DrawType::Polygon,
        Geometry::Polygon(square(lat, lng, size)),
    )
}

pub fn square(lat: f64, lng: f64, size: f64) -> Polygon {
    Polygon::new(vec![
        Point(lat, lng),
        Point(lat, lng + size),
        Point(lat + size, lng + size),
        Point(lat + size, lng),
    ])
}

pub fn circle_field(id: i64, lat: f64, lng: f64, radius: f64) -> Field {
    Field::new(
        id,
        Some(format!("circle {id}")),
        DrawType::Circle,
        Geometry::Circle(GeoCircle::new(Point(lat, lng), radius)),
    )
}

pub fn polygon_field(id: i64, vertices: Vec<Point>) -> Field {
    Field::new(id, None, DrawType::Polygon, Geometry::Polygon(Polygon::new(vertices)))
}
