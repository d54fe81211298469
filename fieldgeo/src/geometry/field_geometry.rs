use std::slice;

use crate::geometry::geo_enums::RepresentativePoint;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{GeoCircle, Point, Polygon, Rect};

/// Geometry of a field: either a polygon or a geodesic circle.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    Circle(GeoCircle),
}

impl Geometry {
    /// Whether the geometry contains `point`. Degenerate geometries never do.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Geometry::Polygon(poly) => poly.collides_with(point),
            Geometry::Circle(circle) => circle.collides_with(point),
        }
    }

    /// The single point standing in for the geometry in proximity queries:
    /// the circle's center or the polygon's first vertex (not its centroid).
    pub fn representative_point(&self) -> Option<Point> {
        match self {
            Geometry::Polygon(poly) => poly.first_vertex(),
            Geometry::Circle(circle) => Some(circle.center),
        }
        .filter(Point::is_finite)
    }

    /// Like [`Geometry::representative_point`], but following the requested strategy.
    pub fn representative_point_by(&self, strategy: RepresentativePoint) -> Option<Point> {
        match (strategy, self) {
            (RepresentativePoint::FirstVertex, _) | (_, Geometry::Circle(_)) => {
                self.representative_point()
            }
            (RepresentativePoint::Centroid, Geometry::Polygon(poly)) => poly.centroid(),
        }
    }

    /// Points tested against a drawn selection polygon: every polygon vertex, or the circle's center.
    pub fn selection_points(&self) -> &[Point] {
        match self {
            Geometry::Polygon(poly) => poly.vertices(),
            Geometry::Circle(circle) => slice::from_ref(&circle.center),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        match self {
            Geometry::Polygon(poly) => poly.is_degenerate(),
            Geometry::Circle(circle) => circle.is_degenerate(),
        }
    }

    /// Polygon outline used for drawing: the polygon itself, or the circle approximated by `circle_segments`.
    pub fn outline(&self, circle_segments: usize) -> Polygon {
        match self {
            Geometry::Polygon(poly) => poly.clone(),
            Geometry::Circle(circle) => circle.to_polygon(circle_segments),
        }
    }

    pub fn area_ha(&self) -> f64 {
        self.area_m2() / crate::geometry::area::SQ_METERS_PER_HECTARE
    }
}

impl CollidesWith<Point> for Geometry {
    fn collides_with(&self, point: &Point) -> bool {
        self.contains(point)
    }
}

impl Shape for Geometry {
    fn centroid(&self) -> Option<Point> {
        match self {
            Geometry::Polygon(poly) => poly.centroid(),
            Geometry::Circle(circle) => circle.centroid(),
        }
    }

    fn area_m2(&self) -> f64 {
        match self {
            Geometry::Polygon(poly) => poly.area_m2(),
            Geometry::Circle(circle) => circle.area_m2(),
        }
    }

    fn bbox(&self) -> Option<Rect> {
        match self {
            Geometry::Polygon(poly) => poly.bbox(),
            Geometry::Circle(circle) => circle.bbox(),
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(poly: Polygon) -> Self {
        Geometry::Polygon(poly)
    }
}

impl From<GeoCircle> for Geometry {
    fn from(circle: GeoCircle) -> Self {
        Geometry::Circle(circle)
    }
}
