use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of field geometries.
///
/// Degenerate shapes (polygons with fewer than 3 vertices, non-finite coordinates) have no
/// bounding box and no centroid, and an area of 0.
pub trait Shape {
    /// Geometric center of the shape
    fn centroid(&self) -> Option<Point>;

    /// Area of the interior of the shape in square meters
    fn area_m2(&self) -> f64;

    /// Bounding box of the shape
    fn bbox(&self) -> Option<Rect>;
}
