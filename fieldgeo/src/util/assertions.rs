//Various checks to verify correctness of the results
//Used in debug_assert!() blocks

use crate::entities::{Field, FieldId};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Polygon;
use crate::ndvi::GridCell;

/// Every selected id belongs to a field, and the ids appear in the same order as the fields.
pub fn selection_is_ordered_subset(selected: &[FieldId], fields: &[Field]) -> bool {
    let mut remaining = selected.iter().peekable();
    for field in fields {
        if remaining.peek() == Some(&&field.id) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

/// Every grid cell has its center inside `polygon` and an index within `[min_index, max_index]`.
pub fn grid_cells_valid(cells: &[GridCell], polygon: &Polygon, min_index: f64, max_index: f64) -> bool {
    cells.iter().all(|cell| {
        polygon.collides_with(&cell.bounds.centroid())
            && cell.index >= min_index.min(max_index)
            && cell.index <= max_index.max(min_index)
    })
}
