use serde::{Deserialize, Serialize};

///Configuration of the vegetation index gradient grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GradientConfig {
    ///Number of cells along each axis of the field's bounding box
    pub grid_size: usize,
    ///Maximum absolute perturbation applied to the base index of every cell
    pub variation: f64,
    ///Lower clamp of a cell's index
    pub min_index: f64,
    ///Upper clamp of a cell's index
    pub max_index: f64,
    ///Number of segments used when a circular field is approximated by a polygon
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
}

fn default_circle_segments() -> usize {
    32
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            variation: 0.15,
            min_index: 0.1,
            max_index: 0.95,
            circle_segments: default_circle_segments(),
        }
    }
}
