//! Placement of tiles on an integer grid by traversing the neighbor graph
//!
//! Starting from a corner tile fixed at the origin, every link to an
//! unplaced tile is popped from a work stack. The unplaced tile is turned so
//! that the shared border faces the already placed one, and its coordinate
//! follows from the side it docks on.

use std::collections::BTreeMap;

use crate::algorithm::neighbors::NeighborGraph;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::edge::{EdgeHash, EdgeKind};
use crate::spatial::tiles::{Tile, TileId, TileSet};

/// Grid position of a tile, rows growing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Row index
    pub row: i64,
    /// Column index
    pub col: i64,
}

impl Coordinate {
    /// Position of the root tile
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Position of a neighbor whose shared border reads as `docking`
    ///
    /// A neighbor presenting its top border sits one row below, its bottom
    /// border one row above, its right border one column before and its left
    /// border one column after.
    #[must_use]
    pub const fn docked(self, docking: EdgeKind) -> Self {
        match (docking.vertical, docking.higher) {
            (true, true) => Self::new(self.row + 1, self.col),
            (true, false) => Self::new(self.row - 1, self.col),
            (false, true) => Self::new(self.row, self.col - 1),
            (false, false) => Self::new(self.row, self.col + 1),
        }
    }

    /// Coordinate moved by the given offsets
    #[must_use]
    pub const fn offset(self, rows: i64, cols: i64) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

/// Oriented tiles with dense, non-negative coordinates
#[derive(Debug, Clone)]
pub struct Layout {
    tiles: BTreeMap<TileId, Tile>,
    coordinates: BTreeMap<TileId, Coordinate>,
    positions: BTreeMap<Coordinate, TileId>,
    rows: usize,
    cols: usize,
    tile_size: usize,
    transforms_applied: usize,
}

impl Layout {
    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the layout is empty
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile rows and columns of the layout
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Side length of every tile, border included
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Total rotations and flips applied while orienting tiles
    pub const fn transforms_applied(&self) -> usize {
        self.transforms_applied
    }

    /// Coordinate of a tile
    pub fn coordinate(&self, id: TileId) -> Option<Coordinate> {
        self.coordinates.get(&id).copied()
    }

    /// Oriented tile by identifier
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Oriented tile at a grid position
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        let coordinate = Coordinate::new(row as i64, col as i64);
        self.positions
            .get(&coordinate)
            .and_then(|id| self.tiles.get(id))
    }

    /// Coordinates of every tile keyed by identifier
    pub const fn coordinates(&self) -> &BTreeMap<TileId, Coordinate> {
        &self.coordinates
    }

    fn from_placements(
        tiles: BTreeMap<TileId, Tile>,
        placed: BTreeMap<TileId, Coordinate>,
        tile_size: usize,
        transforms_applied: usize,
    ) -> Result<Self> {
        let min_row = placed.values().map(|c| c.row).min().unwrap_or(0);
        let min_col = placed.values().map(|c| c.col).min().unwrap_or(0);
        let max_row = placed.values().map(|c| c.row).max().unwrap_or(-1);
        let max_col = placed.values().map(|c| c.col).max().unwrap_or(-1);

        let coordinates: BTreeMap<TileId, Coordinate> = placed
            .into_iter()
            .map(|(id, coordinate)| (id, coordinate.offset(-min_row, -min_col)))
            .collect();
        let positions: BTreeMap<Coordinate, TileId> = coordinates
            .iter()
            .map(|(&id, &coordinate)| (coordinate, id))
            .collect();

        let rows = (max_row - min_row + 1) as usize;
        let cols = (max_col - min_col + 1) as usize;
        if rows * cols != positions.len() {
            return Err(PuzzleError::MalformedLayout {
                reason: format!(
                    "{} tiles do not fill a {rows}x{cols} rectangle",
                    positions.len()
                ),
            });
        }

        Ok(Self {
            tiles,
            coordinates,
            positions,
            rows,
            cols,
            tile_size,
            transforms_applied,
        })
    }
}

/// Work-list placement of every tile relative to a corner root
pub struct GridAssembler<'a> {
    graph: &'a NeighborGraph,
}

impl<'a> GridAssembler<'a> {
    /// Create an assembler over a neighbor graph
    pub const fn new(graph: &'a NeighborGraph) -> Self {
        Self { graph }
    }

    /// Place every tile, rooting the layout at the lowest corner identifier
    ///
    /// # Errors
    ///
    /// Returns `MissingCorners` when the graph has no corner tile, plus every
    /// error of [`GridAssembler::assemble_from`]
    pub fn assemble(&self, tiles: TileSet) -> Result<Layout> {
        let root = self
            .graph
            .corner_tiles()
            .first()
            .copied()
            .ok_or_else(|| PuzzleError::MissingCorners { tiles: tiles.len() })?;
        self.assemble_from(tiles, root)
    }

    /// Place every tile, keeping `root` unrotated at the origin
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unknown root, any orientation error
    /// raised while normalizing a tile, `MalformedLayout` if two tiles claim
    /// the same position or the result is not a dense rectangle, and
    /// `IncompleteAssembly` if some tiles are never reached
    pub fn assemble_from(&self, tiles: TileSet, root: TileId) -> Result<Layout> {
        let total = tiles.len();
        let tile_size = tiles.tile_size();
        let mut tiles = tiles.into_tiles();
        if !tiles.contains_key(&root) {
            return Err(invalid_parameter("root", &root, &"tile is not in the set"));
        }

        let mut placed: BTreeMap<TileId, Coordinate> = BTreeMap::new();
        let mut occupied: BTreeMap<Coordinate, TileId> = BTreeMap::new();
        placed.insert(root, Coordinate::ORIGIN);
        occupied.insert(Coordinate::ORIGIN, root);

        let mut frontier: Vec<(TileId, TileId, EdgeHash)> = self
            .graph
            .neighbors(root)
            .iter()
            .map(|neighbor| (root, neighbor.tile, neighbor.hash))
            .collect();
        let mut transforms_applied = 0;

        while let Some((anchor, candidate, hash)) = frontier.pop() {
            if placed.contains_key(&candidate) {
                continue;
            }

            let docking = tiles
                .get(&anchor)
                .ok_or_else(|| unknown_tile(anchor))?
                .kind_of_hash(hash)?
                .opposite();
            let tile = tiles
                .get_mut(&candidate)
                .ok_or_else(|| unknown_tile(candidate))?;
            transforms_applied += tile.normalize(hash, docking)?;

            let coordinate = placed
                .get(&anchor)
                .copied()
                .ok_or_else(|| unknown_tile(anchor))?
                .docked(docking);
            if let Some(&other) = occupied.get(&coordinate) {
                return Err(PuzzleError::MalformedLayout {
                    reason: format!(
                        "tiles {other} and {candidate} both placed at ({}, {})",
                        coordinate.row, coordinate.col
                    ),
                });
            }

            tracing::debug!(
                tile = candidate,
                anchor,
                row = coordinate.row,
                col = coordinate.col,
                docking = %docking,
                "tile placed"
            );
            placed.insert(candidate, coordinate);
            occupied.insert(coordinate, candidate);

            frontier.extend(
                self.graph
                    .neighbors(candidate)
                    .iter()
                    .filter(|neighbor| !placed.contains_key(&neighbor.tile))
                    .map(|neighbor| (candidate, neighbor.tile, neighbor.hash)),
            );
        }

        if placed.len() != total {
            let missing: Vec<TileId> = tiles
                .keys()
                .filter(|id| !placed.contains_key(id))
                .copied()
                .collect();
            return Err(PuzzleError::IncompleteAssembly {
                placed: placed.len(),
                total,
                missing,
            });
        }

        let layout = Layout::from_placements(tiles, placed, tile_size, transforms_applied)?;
        tracing::info!(
            root,
            rows = layout.rows,
            cols = layout.cols,
            transforms = layout.transforms_applied,
            "tiles assembled"
        );
        Ok(layout)
    }
}

fn unknown_tile(id: TileId) -> PuzzleError {
    PuzzleError::MalformedLayout {
        reason: format!("tile {id} is linked but missing from the tile set"),
    }
}
