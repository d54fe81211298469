use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::EARTH_RADIUS_M;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Rect};

/// Even-odd ray-casting test: is `point` inside the polygon described by `vertices`.
///
/// A ray is shot from `point` along the longitude axis and every edge it crosses flips the result.
/// The ring is implicitly closed, a repeated closing vertex only adds a zero-length edge and changes nothing.
/// Winding order is irrelevant.
///
/// Points exactly on an edge or vertex are a known boundary ambiguity: depending on which edge they touch
/// the test reports either side. Callers must not rely on a specific outcome there.
///
/// Fewer than 3 vertices never contain anything.
pub fn is_point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 || !point.is_finite() {
        return false;
    }
    let Point(lat, lng) = *point;

    let mut inside = false;
    for (prev, curr) in vertices.iter().circular_tuple_windows() {
        let (y_i, x_i) = (curr.lat(), curr.lng());
        let (y_j, x_j) = (prev.lat(), prev.lng());

        //edge straddles the ray, y_i != y_j is guaranteed here
        if (y_i > lat) != (y_j > lat) && lng < (x_j - x_i) * (lat - y_i) / (y_j - y_i) + x_i {
            inside = !inside;
        }
    }
    inside
}

/// Polygon field geometry: an ordered ring of vertices, implicitly closed.
///
/// The vertices are kept exactly as received. A polygon with fewer than 3 vertices is
/// degenerate: it has no area, no bounding box and contains no point.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn first_vertex(&self) -> Option<Point> {
        self.vertices.first().copied()
    }

    /// Iterates over all edges, including the closing edge from the last vertex back to the first.
    pub fn edge_iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Planar signed area in square degrees (shoelace formula, longitude as `x`).
    /// Positive for counterclockwise rings.
    pub fn signed_area_deg2(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let double_area: f64 = self
            .edge_iter()
            .map(|(a, b)| a.lng() * b.lat() - b.lng() * a.lat())
            .sum();
        double_area / 2.0
    }
}

impl CollidesWith<Point> for Polygon {
    fn collides_with(&self, point: &Point) -> bool {
        is_point_in_polygon(point, &self.vertices)
    }
}

impl Shape for Polygon {
    /// Area-weighted centroid. Falls back to the vertex average when the ring has no area.
    fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() || self.vertices.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let area = self.signed_area_deg2();
        if area.abs() < f64::EPSILON {
            let n = self.vertices.len() as f64;
            let (lat_sum, lng_sum) = self
                .vertices
                .iter()
                .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat(), lng + p.lng()));
            return Some(Point(lat_sum / n, lng_sum / n));
        }

        let (c_lat, c_lng) = self.edge_iter().fold((0.0, 0.0), |(c_lat, c_lng), (a, b)| {
            let cross = a.lng() * b.lat() - b.lng() * a.lat();
            (
                c_lat + (a.lat() + b.lat()) * cross,
                c_lng + (a.lng() + b.lng()) * cross,
            )
        });
        Some(Point(c_lat / (6.0 * area), c_lng / (6.0 * area)))
    }

    /// Planar approximation: the shoelace area in square degrees scaled uniformly by
    /// `R² · (π/180)²`. Longitude compression towards the poles is not corrected.
    fn area_m2(&self) -> f64 {
        let deg_to_rad = std::f64::consts::PI / 180.0;
        let area = self.signed_area_deg2().abs() * EARTH_RADIUS_M.powi(2) * deg_to_rad * deg_to_rad;
        match area.is_finite() {
            true => area,
            false => 0.0,
        }
    }

    fn bbox(&self) -> Option<Rect> {
        match self.is_degenerate() {
            true => None,
            false => Rect::from_points(&self.vertices),
        }
    }
}
