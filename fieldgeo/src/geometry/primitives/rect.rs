use itertools::Itertools;

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

///Axis-aligned box in latitude/longitude space.
///
///Unlike a drawn rectangle it may be degenerate (zero width or height):
///the bounding box of a single point is a valid box.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl Rect {
    pub fn new(lat_min: f64, lng_min: f64, lat_max: f64, lng_max: f64) -> Self {
        debug_assert!(
            lat_min <= lat_max && lng_min <= lng_max,
            "invalid rect, lat: [{lat_min}, {lat_max}], lng: [{lng_min}, {lng_max}]"
        );
        Rect {
            lat_min,
            lng_min,
            lat_max,
            lng_max,
        }
    }

    /// Smallest box containing all `points`.
    /// Returns `None` if there are no points or any of them has a non-finite coordinate.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Rect> {
        let points = points.into_iter().collect_vec();
        if points.is_empty() || points.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let (lat_min, lat_max) = points
            .iter()
            .map(|p| p.lat())
            .minmax()
            .into_option()?;
        let (lng_min, lng_max) = points
            .iter()
            .map(|p| p.lng())
            .minmax()
            .into_option()?;

        Some(Rect::new(lat_min, lng_min, lat_max, lng_max))
    }

    /// Extent along the longitude axis
    pub fn width(&self) -> f64 {
        self.lng_max - self.lng_min
    }

    /// Extent along the latitude axis
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lng_min + self.lng_max) / 2.0,
        )
    }

    /// Returns the four corners of `self`, clockwise starting at the south-west corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.lat_min, self.lng_min),
            Point(self.lat_max, self.lng_min),
            Point(self.lat_max, self.lng_max),
            Point(self.lat_min, self.lng_max),
        ]
    }

    /// The corners of `self` as a ring, closed by repeating the first corner.
    pub fn ring(&self) -> Vec<Point> {
        let corners = self.corners();
        corners.iter().chain(corners.first()).copied().collect()
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            lat_min: f64::min(a.lat_min, b.lat_min),
            lng_min: f64::min(a.lng_min, b.lng_min),
            lat_max: f64::max(a.lat_max, b.lat_max),
            lng_max: f64::max(a.lng_max, b.lng_max),
        }
    }
}

impl CollidesWith<Rect> for Rect {
    /// Inclusive: boxes that only touch are considered colliding
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.lat_min, other.lat_min) <= f64::min(self.lat_max, other.lat_max)
            && f64::max(self.lng_min, other.lng_min) <= f64::min(self.lng_max, other.lng_max)
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(lat, lng) = *point;
        lat >= self.lat_min && lat <= self.lat_max && lng >= self.lng_min && lng <= self.lng_max
    }
}
