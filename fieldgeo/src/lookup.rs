use ordered_float::OrderedFloat;

use crate::entities::Field;
use crate::geometry::geo_enums::RepresentativePoint;
use crate::geometry::primitives::Point;

/// Returns the first field, in slice order, whose geometry contains `point`.
///
/// Overlapping fields are resolved by order alone, not by area or any other priority.
pub fn find_containing_field<'a>(point: &Point, fields: &'a [Field]) -> Option<&'a Field> {
    fields.iter().find(|f| f.contains(point))
}

/// Returns every field containing `point`, in slice order.
pub fn find_all_containing_fields<'a>(point: &Point, fields: &'a [Field]) -> Vec<&'a Field> {
    fields.iter().filter(|f| f.contains(point)).collect()
}

/// Returns the field whose representative point (circle center or first polygon vertex) is closest to `point`.
///
/// This is a proximity approximation, not a distance to the field's boundary or centroid.
/// See [`find_nearest_field_by`] to opt into centroids.
pub fn find_nearest_field<'a>(point: &Point, fields: &'a [Field]) -> Option<&'a Field> {
    find_nearest_field_by(point, fields, RepresentativePoint::FirstVertex)
}

/// Returns the field whose representative point, chosen by `strategy`, has the minimum great-circle distance to `point`.
///
/// Fields without a usable representative point, and fields whose draw type disagrees with their geometry, are skipped. On ties the earlier field wins.
pub fn find_nearest_field_by<'a>(
    point: &Point,
    fields: &'a [Field],
    strategy: RepresentativePoint,
) -> Option<&'a Field> {
    fields
        .iter()
        .filter(|field| field.is_consistent())
        .filter_map(|field| {
            let rep = field.geometry.representative_point_by(strategy)?;
            let distance = point.distance_m(&rep);
            (!distance.is_nan()).then_some((field, distance))
        })
        .min_by_key(|(_, distance)| OrderedFloat(*distance))
        .map(|(field, _)| field)
}
