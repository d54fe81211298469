use serde::{Deserialize, Serialize};

use fieldgeo::geometry::geo_enums::RepresentativePoint;
use fieldgeo::io::svg::SvgDrawOptions;
use fieldgeo::util::GradientConfig;

/// Configuration of the command-line front end
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FieldGeoConfig {
    /// Configuration of the vegetation index gradient grids
    pub gradient: GradientConfig,
    /// Seed for the PRNG. If undefined, gradients are generated in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Index assumed for fields without a measured value. If undefined, those fields are drawn without overlay
    #[serde(default)]
    pub default_index: Option<f64>,
    /// Point standing in for a field when no field contains the located point
    #[serde(default)]
    pub nearest_by: RepresentativePoint,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FieldGeoConfig {
    fn default() -> Self {
        Self {
            gradient: GradientConfig::default(),
            prng_seed: Some(0),
            default_index: None,
            nearest_by: RepresentativePoint::FirstVertex,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
