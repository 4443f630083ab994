//! Image construction and marker analysis over an assembled layout

/// Marker footprints and the orientation-aware scanner
pub mod patterns;
/// Border stripping and image stitching
pub mod stitching;
