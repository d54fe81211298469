use anyhow::{Context, Result, bail, ensure};
use log::warn;

use crate::entities::Field;
use crate::geometry::Geometry;
use crate::geometry::geo_enums::DrawType;
use crate::geometry::primitives::{GeoCircle, Point, Polygon};
use crate::io::ext_repr::{ExtCoordinates, ExtField};

/// Converts an external field record into a [`Field`], validating the shape of its coordinates.
pub fn import_field(ext_field: &ExtField) -> Result<Field> {
    let Some(coordinates) = &ext_field.coordinates else {
        bail!("field {} has no coordinates", ext_field.id);
    };
    let geometry = match (ext_field.draw_type, coordinates) {
        (DrawType::Polygon | DrawType::Rectangle, ExtCoordinates::Ring(ring)) => {
            Geometry::Polygon(import_polygon(ring)?)
        }
        (DrawType::Circle, ExtCoordinates::Circle { center, radius }) => {
            ensure!(
                radius.is_finite() && *radius >= 0.0,
                "invalid circle radius: {radius}"
            );
            Geometry::Circle(GeoCircle::new(import_point(center)?, *radius))
        }
        (draw_type, _) => bail!(
            "field {}: coordinates do not match draw type {draw_type:?}",
            ext_field.id
        ),
    };

    Ok(Field::new(
        ext_field.id,
        ext_field.name.clone(),
        ext_field.draw_type,
        geometry,
    ))
}

/// Imports a batch of raw JSON records one by one.
///
/// A record that cannot be decoded or imported is logged and skipped, it never aborts the batch.
pub fn import_fields(records: &[serde_json::Value]) -> Vec<Field> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let imported = serde_json::from_value::<ExtField>(record.clone())
                .context("malformed field record")
                .and_then(|ext_field| import_field(&ext_field));
            match imported {
                Ok(field) => Some(field),
                Err(e) => {
                    warn!("[IMPORT] skipping field record #{i}: {e:#}");
                    None
                }
            }
        })
        .collect()
}

/// Imports a polygon ring. Fewer than 3 positions are accepted, the result is a degenerate polygon.
pub fn import_polygon(ring: &[Vec<f64>]) -> Result<Polygon> {
    let vertices = ring
        .iter()
        .map(|position| import_point(position))
        .collect::<Result<Vec<_>>>()?;
    if vertices.len() < 3 {
        warn!(
            "[IMPORT] polygon with {} vertices is degenerate and will be treated as empty",
            vertices.len()
        );
    }
    Ok(Polygon::new(vertices))
}

pub fn import_point(position: &[f64]) -> Result<Point> {
    let [lat, lng, ..] = position else {
        bail!("position needs at least 2 values, got {position:?}");
    };
    let point = Point(*lat, *lng);
    ensure!(point.is_finite(), "non-finite position: {position:?}");
    Ok(point)
}
