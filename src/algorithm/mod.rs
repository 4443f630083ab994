/// Tile placement on an integer grid by walking the neighbor graph
pub mod assembly;
/// Bit overlay of marker-covered pixels
pub mod coverage;
/// Full solve orchestration
pub mod executor;
/// Adjacency discovery through shared border hashes
pub mod neighbors;
