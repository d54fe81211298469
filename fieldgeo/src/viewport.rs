use itertools::Itertools;

use crate::entities::Field;
use crate::geometry::primitives::{Point, Rect};

/// Where the map opens when there is nothing to center on
pub const DEFAULT_CENTER: Point = Point(-4.079, 104.167);

/// Average of all field selection points (polygon vertices, circle centers).
/// Records whose draw type disagrees with their geometry are left out.
/// Falls back to [`DEFAULT_CENTER`] when the fields carry no usable coordinates.
pub fn map_center(fields: &[Field]) -> Point {
    let points = finite_points(fields).collect_vec();
    if points.is_empty() {
        return DEFAULT_CENTER;
    }
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat(), lng + p.lng()));
    Point(lat_sum / n, lng_sum / n)
}

/// Box the map should fit to show all fields, `None` when there are no usable coordinates.
pub fn fields_bounds(fields: &[Field]) -> Option<Rect> {
    Rect::from_points(finite_points(fields))
}

fn finite_points(fields: &[Field]) -> impl Iterator<Item = &Point> {
    fields
        .iter()
        .filter(|f| f.is_consistent())
        .flat_map(|f| f.geometry.selection_points())
        .filter(|p| p.is_finite())
}
