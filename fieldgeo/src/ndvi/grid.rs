use log::debug;
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::geometry::Geometry;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Polygon, Rect};
use crate::util::GradientConfig;
use crate::util::assertions;

/// Rectangular piece of a field's bounding box, tagged with a vegetation index.
///
/// Generated per render pass, never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    pub bounds: Rect,
    pub index: f64,
}

impl GridCell {
    /// Closed ring (5 points) of the cell
    pub fn ring(&self) -> Vec<Point> {
        self.bounds.ring()
    }
}

/// Subdivides the bounding box of `polygon` into `grid_size` × `grid_size` cells and keeps the cells
/// whose center lies inside the polygon, each with an index randomly perturbed around `base_index`.
///
/// Uses the default perturbation (±0.15) and clamp bounds ([0.1, 0.95]) of [`GradientConfig`].
pub fn build_gradient_grid(
    polygon: &Polygon,
    base_index: f64,
    grid_size: usize,
    rng: &mut impl Rng,
) -> Vec<GridCell> {
    let config = GradientConfig {
        grid_size,
        ..GradientConfig::default()
    };
    build_gradient_grid_with(polygon, base_index, &config, rng)
}

/// See [`build_gradient_grid`]. The grid is sparse: cells whose center falls outside the polygon are omitted.
///
/// Returns no cells for degenerate polygons, bounding boxes without area, a grid size of 0 or a non-finite base index.
pub fn build_gradient_grid_with(
    polygon: &Polygon,
    base_index: f64,
    config: &GradientConfig,
    rng: &mut impl Rng,
) -> Vec<GridCell> {
    let n = config.grid_size;
    let bbox = match polygon.bbox() {
        Some(bbox) if bbox.area() > 0.0 && n > 0 && base_index.is_finite() => bbox,
        _ => return vec![],
    };

    let lat_step = bbox.height() / n as f64;
    let lng_step = bbox.width() / n as f64;

    let mut cells = vec![];
    for i in 0..n {
        for j in 0..n {
            let bounds = Rect::new(
                bbox.lat_min + i as f64 * lat_step,
                bbox.lng_min + j as f64 * lng_step,
                bbox.lat_min + (i + 1) as f64 * lat_step,
                bbox.lng_min + (j + 1) as f64 * lng_step,
            );
            if polygon.collides_with(&bounds.centroid()) {
                let variation = (rng.random::<f64>() - 0.5) * 2.0 * config.variation;
                let index = f64::max(
                    config.min_index,
                    f64::min(config.max_index, base_index + variation),
                );
                cells.push(GridCell { bounds, index });
            }
        }
    }

    debug_assert!(assertions::grid_cells_valid(
        &cells,
        polygon,
        config.min_index,
        config.max_index
    ));
    cells
}

/// How a field is painted on the vegetation index map.
#[derive(Clone, Debug, PartialEq)]
pub enum NdviOverlay {
    /// Sparse grid of cells with indices perturbed around `base_index`
    Gradient {
        base_index: f64,
        cells: Vec<GridCell>,
    },
    /// Whole outline in a single color, when no grid could be built
    Solid(f64),
}

impl NdviOverlay {
    /// Builds the overlay of a field geometry. Circles are gridded through their polygon approximation.
    ///
    /// Falls back to [`NdviOverlay::Solid`] with `base_index` whenever the grid comes out empty.
    pub fn build(
        geometry: &Geometry,
        base_index: f64,
        config: &GradientConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let outline = geometry.outline(config.circle_segments);
        Self::from_polygon(&outline, base_index, config, rng)
    }

    pub fn from_polygon(
        polygon: &Polygon,
        base_index: f64,
        config: &GradientConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let cells = build_gradient_grid_with(polygon, base_index, config, rng);
        match cells.is_empty() {
            true => {
                debug!(
                    "[NDVI] no grid cells for polygon with {} vertices, falling back to solid fill",
                    polygon.n_vertices()
                );
                NdviOverlay::Solid(base_index)
            }
            false => NdviOverlay::Gradient { base_index, cells },
        }
    }

    /// Lowest and highest index painted by the overlay
    pub fn index_range(&self) -> (f64, f64) {
        match self {
            NdviOverlay::Solid(index) => (*index, *index),
            NdviOverlay::Gradient { cells, .. } => {
                let min = cells.iter().map(|c| OrderedFloat(c.index)).min();
                let max = cells.iter().map(|c| OrderedFloat(c.index)).max();
                match (min, max) {
                    (Some(min), Some(max)) => (min.0, max.0),
                    _ => (f64::NAN, f64::NAN),
                }
            }
        }
    }

    /// Index the overlay was built from, before any per-cell perturbation
    pub fn base_index(&self) -> f64 {
        match self {
            NdviOverlay::Solid(index) | NdviOverlay::Gradient { base_index: index, .. } => *index,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, NdviOverlay::Solid(_))
    }
}
