//! Assembly of square pixel tiles into one image by matching their borders
//!
//! Tiles arrive in arbitrary orientation. Shared border readings link them
//! into a neighbor graph, the graph is walked to rotate and place every tile,
//! and the stitched interiors are scanned for a marker footprint in all
//! eight orientations.

#![forbid(unsafe_code)]

/// Tile linking, assembly and solve orchestration
pub mod algorithm;
/// Image stitching and marker scanning
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Border readings, grid transforms and tiles
pub mod spatial;

pub use algorithm::executor::{JigsawSolver, Solution};
pub use io::error::{PuzzleError, Result};
pub use spatial::{Tile, TileSet};
