use serde::{Deserialize, Serialize};

use fieldgeo::entities::{Field, FieldId};
use fieldgeo::ndvi::NdviBand;

/// Short description of a field in a report
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldSummary {
    pub id: FieldId,
    pub name: String,
    pub area_ha: f64,
    pub area: String,
}

impl From<&Field> for FieldSummary {
    fn from(field: &Field) -> Self {
        let area_ha = field.area_ha();
        FieldSummary {
            id: field.id,
            name: field.display_name(),
            area_ha,
            area: fieldgeo::geometry::format_area(area_ha),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocateOutput {
    pub lat: f64,
    pub lng: f64,
    /// Fields containing the point, at most one unless all were requested
    pub containing: Vec<FieldSummary>,
    /// Closest field, only reported when no field contains the point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest: Option<FieldSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SelectOutput {
    pub selected: Vec<FieldSummary>,
    pub total_area_ha: f64,
    pub total_area: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaOutput {
    pub fields: Vec<FieldSummary>,
    pub total_area_ha: f64,
    pub total_area: String,
}

/// Overlay painted for one field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OverlaySummary {
    pub id: FieldId,
    /// Number of gradient cells, 0 for a solid fill
    pub n_cells: usize,
    pub min_index: f64,
    pub max_index: f64,
    pub band: NdviBand,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderOutput {
    pub overlays: Vec<OverlaySummary>,
    /// Fields drawn without any vegetation index
    pub without_index: Vec<FieldId>,
    pub n_demo_polygons: usize,
    pub svg_file: String,
}
