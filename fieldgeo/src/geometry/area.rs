use crate::geometry::Geometry;
use crate::geometry::geo_enums::DrawType;
use crate::geometry::geo_traits::Shape;

pub const SQ_METERS_PER_HECTARE: f64 = 10_000.0;

/// Areas below this many hectares are displayed in square meters
pub const SMALL_AREA_THRESHOLD_HA: f64 = 0.01;

/// Area of a field in hectares.
///
/// * circles: `π · r² / 10 000`
/// * polygons and rectangles: planar shoelace over the lat/lng pairs, scaled uniformly to square
///   meters (see [`Polygon`](crate::geometry::primitives::Polygon)'s [`Shape::area_m2`]).
///   Only accurate for small fields, the longitude compression at higher latitudes is not corrected.
///
/// Returns 0 for degenerate geometries and when `kind` does not match the geometry's variant.
pub fn calculate_area(kind: DrawType, geometry: &Geometry) -> f64 {
    match kind.matches(geometry) {
        true => geometry.area_ha(),
        false => 0.0,
    }
}

/// Formats an area given in hectares for display: `"50 m²"` below 0.01 ha, `"1.50 ha"` otherwise.
pub fn format_area(hectares: f64) -> String {
    if hectares < SMALL_AREA_THRESHOLD_HA {
        format!("{:.0} m²", hectares * SQ_METERS_PER_HECTARE)
    } else {
        format!("{hectares:.2} ha")
    }
}
