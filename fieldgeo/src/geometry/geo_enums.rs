use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// How a field was drawn in the editor, stored next to its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawType {
    Polygon,
    Rectangle,
    Circle,
}

impl DrawType {
    /// Whether a geometry has the variant this draw type calls for.
    /// Rectangles are stored as ordinary polygons.
    pub fn matches(self, geometry: &Geometry) -> bool {
        matches!(
            (self, geometry),
            (DrawType::Polygon | DrawType::Rectangle, Geometry::Polygon(_))
                | (DrawType::Circle, Geometry::Circle(_))
        )
    }
}

/// Which single point stands in for a field in proximity queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentativePoint {
    /// Circle center, or the first vertex of a polygon
    #[default]
    FirstVertex,
    /// Circle center, or the area-weighted centroid of a polygon
    Centroid,
}
