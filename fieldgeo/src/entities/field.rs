use crate::geometry::geo_enums::DrawType;
use crate::geometry::primitives::Point;
use crate::geometry::{Geometry, calculate_area};

/// Identifier of a field, as assigned by the backend
pub type FieldId = i64;

/// Read-only snapshot of a field record.
///
/// Fields are owned by the backend; this library never mutates them.
/// Selection is tracked separately, by [`FieldId`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub id: FieldId,
    pub name: Option<String>,
    /// Discriminator telling which geometry variant applies
    pub draw_type: DrawType,
    pub geometry: Geometry,
}

impl Field {
    pub fn new(id: FieldId, name: Option<String>, draw_type: DrawType, geometry: Geometry) -> Self {
        Field {
            id,
            name,
            draw_type,
            geometry,
        }
    }

    /// Whether the draw type agrees with the geometry variant.
    /// Inconsistent records never contain, match or select anything.
    pub fn is_consistent(&self) -> bool {
        self.draw_type.matches(&self.geometry)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.is_consistent() && self.geometry.contains(point)
    }

    /// Area in hectares, see [`calculate_area`]
    pub fn area_ha(&self) -> f64 {
        calculate_area(self.draw_type, &self.geometry)
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Field {}", self.id),
        }
    }
}
