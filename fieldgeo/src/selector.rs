use itertools::Itertools;
use log::debug;

use crate::entities::{Field, FieldId};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Polygon, Rect};
use crate::util::assertions;

/// Returns the ids of the fields picked by a user-drawn polygon, in slice order.
///
/// A field is picked when the bounding boxes of the drawn polygon and of the field's selection points
/// (every vertex, or the circle's center) intersect and either
/// * the center of the field's bounding box lies inside the drawn polygon, or
/// * any single vertex of the field lies inside it.
///
/// This is a heuristic, not an exact polygon intersection: a field that overlaps the drawn polygon without
/// any vertex or its box center inside is missed. A circle is represented by its center alone.
///
/// An empty result is a valid outcome. Degenerate drawn polygons and degenerate fields never match.
pub fn select_fields_in_polygon(drawn: &Polygon, fields: &[Field]) -> Vec<FieldId> {
    let Some(drawn_bbox) = drawn.bbox() else {
        debug!("[SEL] degenerate selection polygon ({} vertices)", drawn.n_vertices());
        return vec![];
    };

    let selected = fields
        .iter()
        .filter(|field| is_field_selected(drawn, &drawn_bbox, field))
        .map(|field| field.id)
        .collect_vec();

    debug_assert!(assertions::selection_is_ordered_subset(&selected, fields));
    debug!(
        "[SEL] {} of {} field(s) inside drawn polygon",
        selected.len(),
        fields.len()
    );
    selected
}

fn is_field_selected(drawn: &Polygon, drawn_bbox: &Rect, field: &Field) -> bool {
    if !field.is_consistent() || field.geometry.is_degenerate() {
        return false;
    }
    let points = field.geometry.selection_points();
    let Some(field_bbox) = Rect::from_points(points) else {
        return false;
    };
    if !drawn_bbox.collides_with(&field_bbox) {
        return false;
    }

    drawn.collides_with(&field_bbox.centroid())
        || (points.len() > 1 && points.iter().any(|p| drawn.collides_with(p)))
}
