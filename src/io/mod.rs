//! Input/output operations and error handling

/// Command-line arguments and batch processing
pub mod cli;
/// Constants shared across the crate
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export of stitched images
pub mod image;
/// Tile and marker description parsing
pub mod input;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
