use serde::{Deserialize, Serialize};

use crate::entities::FieldId;
use crate::geometry::geo_enums::DrawType;

/// External representation of a [`Field`](crate::entities::Field).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtField {
    /// Unique identifier of the field
    pub id: FieldId,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// How the field was drawn, decides how `coordinates` are interpreted
    pub draw_type: DrawType,
    /// Geometry of the field, absent for records that were never drawn
    #[serde(default)]
    pub coordinates: Option<ExtCoordinates>,
}

/// The two coordinate layouts a field record can carry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtCoordinates {
    /// `[[lat, lng], ...]`, additional values per position (e.g. altitude from KMZ imports) are ignored
    Ring(Vec<Vec<f64>>),
    /// `{ "center": [lat, lng], "radius": meters }`
    Circle { center: Vec<f64>, radius: f64 },
}
