#![doc = document_features::document_features!()]
//! Geometry and field-selection utilities used by map-based field editors.
//!
//! All functions operate on field snapshots already loaded in memory. They never perform I/O
//! and never fail on malformed geometry: a conservative default (`false`, `None`, an empty
//! collection or `0`) is returned instead, so that one corrupt field record cannot take down
//! a map editor rendering hundreds of them.

/// Geometric primitives (points, bounding boxes, polygons, geodesic circles) and base algorithms
pub mod geometry;

/// Field snapshots, selection state and the interactive field editor
pub mod entities;

/// Point-to-field lookups: containing, all containing and nearest field
pub mod lookup;

/// Selection of fields by a user-drawn polygon
pub mod selector;

/// Vegetation index gradient grids and color mapping
pub mod ndvi;

/// Map centering and fit-to-bounds helpers
pub mod viewport;

/// Importing field records into and exporting them out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
