//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Border readings and the transforms that move between them
//! - Rotation, mirroring and oriented views of pixel grids
//! - Tile data structures and tile sets

/// Border kinds and the differences between them
pub mod edge;
/// Grid transforms and orientation views
pub mod grid;
/// Square tiles and tile collections
pub mod tiles;

pub use tiles::{Tile, TileSet};
