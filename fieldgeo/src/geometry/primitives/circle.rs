use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Polygon, Rect};
use crate::geometry::{EARTH_RADIUS_M, METERS_PER_DEGREE, haversine_distance};

/// Is `point` within `radius` meters (great-circle distance) of `center`.
pub fn is_point_in_circle(point: &Point, center: &Point, radius: f64) -> bool {
    if !point.is_finite() || !center.is_finite() || radius.is_nan() || radius < 0.0 {
        return false;
    }
    haversine_distance(*point, *center) <= radius
}

/// Circular field geometry: a center point and a radius in meters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCircle {
    pub center: Point,
    pub radius: f64,
}

impl GeoCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {}",
            radius
        );
        debug_assert!(center.is_finite(), "invalid circle center: {:?}", center);

        Self { center, radius }
    }

    pub fn is_degenerate(&self) -> bool {
        !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0
    }

    /// Approximates the circle by a closed ring of `n_segments` + 1 points, as drawn on the map.
    ///
    /// Uses one degree of latitude ≈ 111 km and compresses longitude by `cos(lat)`.
    pub fn to_polygon(&self, n_segments: usize) -> Polygon {
        if self.is_degenerate() || n_segments < 3 {
            return Polygon::default();
        }
        let Point(c_lat, c_lng) = self.center;
        let d_lat = self.radius / METERS_PER_DEGREE;
        let d_lng = self.radius / (METERS_PER_DEGREE * c_lat.to_radians().cos());

        let mut vertices = (0..n_segments)
            .map(|i| {
                let angle = (i as f64 / n_segments as f64) * 2.0 * PI;
                Point(c_lat + d_lat * angle.cos(), c_lng + d_lng * angle.sin())
            })
            .collect::<Vec<_>>();
        vertices.push(vertices[0]);
        Polygon::new(vertices)
    }
}

impl CollidesWith<Point> for GeoCircle {
    fn collides_with(&self, point: &Point) -> bool {
        is_point_in_circle(point, &self.center, self.radius)
    }
}

impl Shape for GeoCircle {
    fn centroid(&self) -> Option<Point> {
        self.center.is_finite().then_some(self.center)
    }

    fn area_m2(&self) -> f64 {
        match self.is_degenerate() {
            true => 0.0,
            false => PI * self.radius * self.radius,
        }
    }

    fn bbox(&self) -> Option<Rect> {
        if self.is_degenerate() {
            return None;
        }
        let Point(lat, lng) = self.center;
        let d_lat = (self.radius / EARTH_RADIUS_M).to_degrees();
        let d_lng = match lat.to_radians().cos() {
            cos if cos > f64::EPSILON => f64::min(d_lat / cos, 180.0),
            _ => 180.0,
        };
        Some(Rect::new(lat - d_lat, lng - d_lng, lat + d_lat, lng + d_lng))
    }
}
