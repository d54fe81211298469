/// Hectare area of field geometries and its display formatting
pub mod area;
pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

mod field_geometry;
#[cfg(feature = "geo-interop")]
mod interop;

#[doc(inline)]
pub use area::{calculate_area, format_area};
#[doc(inline)]
pub use field_geometry::Geometry;
#[doc(inline)]
pub use primitives::circle::is_point_in_circle;
#[doc(inline)]
pub use primitives::polygon::is_point_in_polygon;

/// Mean radius of the earth in meters, used by all spherical approximations
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Rough length of one degree of latitude, used to turn meters into degrees when drawing
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Great-circle distance in meters between two points on a sphere with radius [`EARTH_RADIUS_M`].
///
/// Spherical rather than ellipsoidal, the error is negligible at field scale (< 10 km).
pub fn haversine_distance(a: primitives::Point, b: primitives::Point) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lng = (b.lng() - a.lng()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
