/// External representation of field records, as served by the field listing API
pub mod ext_repr;

/// Exporting fields to their external representation
pub mod export;

/// Importing field records into internal representations
pub mod import;

/// Drawing fields and their vegetation index overlays as SVG
pub mod svg;
