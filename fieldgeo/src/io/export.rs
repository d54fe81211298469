use crate::entities::Field;
use crate::geometry::Geometry;
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtCoordinates, ExtField};

/// Converts a [`Field`] back into its external representation.
pub fn export_field(field: &Field) -> ExtField {
    let coordinates = match &field.geometry {
        Geometry::Polygon(poly) => {
            ExtCoordinates::Ring(poly.vertices().iter().map(|p| ext_position(*p)).collect())
        }
        Geometry::Circle(circle) => ExtCoordinates::Circle {
            center: ext_position(circle.center),
            radius: circle.radius,
        },
    };
    ExtField {
        id: field.id,
        name: field.name.clone(),
        draw_type: field.draw_type,
        coordinates: Some(coordinates),
    }
}

fn ext_position(Point(lat, lng): Point) -> Vec<f64> {
    vec![lat, lng]
}
