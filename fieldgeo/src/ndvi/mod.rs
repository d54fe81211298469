//! Vegetation index (NDVI) visualization: gradient grids over field polygons and index-to-color mapping.

mod color;
mod demo;
mod grid;

#[doc(inline)]
pub use color::{Color, NdviBand, band_color, index_to_color};
#[doc(inline)]
pub use demo::{DemoPolygon, demo_polygons};
#[doc(inline)]
pub use grid::{GridCell, NdviOverlay, build_gradient_grid, build_gradient_grid_with};
