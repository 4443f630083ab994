//! Adjacency discovery between tiles through shared border hashes
//!
//! Two tiles are adjacent when one of the first tile's natural side readings
//! equals any reading of the second tile. One natural reading suffices: when
//! two borders dock, at least one of them is read unmirrored in its own frame.

use std::collections::{BTreeMap, BTreeSet};

use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::edge::EdgeHash;
use crate::spatial::tiles::{TileId, TileSet};

/// Undirected adjacency between two tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighborLink {
    /// Lower identifier
    pub first: TileId,
    /// Higher identifier
    pub second: TileId,
    /// Border hash shared by both tiles
    pub hash: EdgeHash,
}

/// One entry of a tile's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Neighbor {
    /// Adjacent tile
    pub tile: TileId,
    /// Border hash shared with it
    pub hash: EdgeHash,
}

/// Adjacency lists for every tile of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborGraph {
    adjacency: BTreeMap<TileId, Vec<Neighbor>>,
    links: Vec<NeighborLink>,
}

impl NeighborGraph {
    /// Compare every pair of tiles and record the ones sharing a border
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousAdjacency` if a pair shares more than one border hash
    pub fn build(tiles: &TileSet) -> Result<Self> {
        let hashes: Vec<(TileId, BTreeSet<EdgeHash>, BTreeSet<EdgeHash>)> = tiles
            .iter()
            .map(|tile| (tile.id(), tile.actual_hashes(), tile.variant_hashes()))
            .collect();

        let mut adjacency: BTreeMap<TileId, Vec<Neighbor>> =
            tiles.ids().map(|id| (id, Vec::new())).collect();
        let mut links = Vec::new();

        for (index, (first, actual, _)) in hashes.iter().enumerate() {
            for (second, _, variants) in hashes.iter().skip(index + 1) {
                let shared: Vec<EdgeHash> = actual.intersection(variants).copied().collect();
                let hash = match shared.as_slice() {
                    [] => continue,
                    [hash] => *hash,
                    _ => {
                        return Err(PuzzleError::AmbiguousAdjacency {
                            first: *first,
                            second: *second,
                            shared,
                        });
                    }
                };

                tracing::debug!(first = *first, second = *second, hash, "tiles share a border");
                links.push(NeighborLink {
                    first: *first,
                    second: *second,
                    hash,
                });
                adjacency.entry(*first).or_default().push(Neighbor {
                    tile: *second,
                    hash,
                });
                adjacency.entry(*second).or_default().push(Neighbor {
                    tile: *first,
                    hash,
                });
            }
        }

        tracing::info!(
            tiles = tiles.len(),
            links = links.len(),
            "neighbor graph built"
        );
        Ok(Self { adjacency, links })
    }

    /// Adjacency list of a tile, empty for unknown identifiers
    pub fn neighbors(&self, id: TileId) -> &[Neighbor] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of neighbors of a tile
    pub fn degree(&self, id: TileId) -> usize {
        self.neighbors(id).len()
    }

    /// Every link, ordered by discovery
    pub fn links(&self) -> &[NeighborLink] {
        &self.links
    }

    /// Number of tiles in the graph, linked or not
    pub fn tile_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Tiles with exactly two neighbors, in ascending order
    pub fn corner_tiles(&self) -> Vec<TileId> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.len() == 2)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Product of the corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns `MissingCorners` when no tile has exactly two neighbors and
    /// `Computation` if the product overflows
    pub fn corner_checksum(&self) -> Result<u64> {
        let corners = self.corner_tiles();
        if corners.is_empty() {
            return Err(PuzzleError::MissingCorners {
                tiles: self.tile_count(),
            });
        }
        corners.iter().try_fold(1_u64, |product, &id| {
            product.checked_mul(id).ok_or_else(|| {
                computation_error(
                    "corner checksum",
                    &format!("product overflows at tile {id}"),
                )
            })
        })
    }
}
