//! Square pixel tiles with border hashing and in-place orientation
//!
//! A tile's borders are hashed on demand rather than memoized, so rotating
//! or flipping a tile can never leave a stale hash behind. Tile counts are
//! small enough that recomputing the eight readings is cheap.

use ndarray::{Array2, ArrayView2};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::io::configuration::{MAX_NORMALIZE_STEPS, MAX_TILE_SIZE, MIN_TILE_SIZE, TILE_BORDER_WIDTH};
use crate::io::error::{PuzzleError, Result, invalid_tile_data};
use crate::spatial::edge::{EdgeHash, EdgeKind, Side};
use crate::spatial::grid::{Transform, flip, rotate, strip_border};

/// Tile identifier as written in the tile header
pub type TileId = u64;

/// Square grid of set (`#`) and unset (`.`) pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pixels: Array2<bool>,
}

impl Tile {
    /// Create a tile from a pixel grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileData` if the grid is not square, too small to have
    /// an interior, or has borders too long to hash into 64 bits
    pub fn new(id: TileId, pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(invalid_tile_data(
                0,
                &format!("tile {id} is {rows}x{cols}, tiles must be square"),
            ));
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&rows) {
            return Err(invalid_tile_data(
                0,
                &format!(
                    "tile {id} has size {rows}, expected between {MIN_TILE_SIZE} and {MAX_TILE_SIZE}"
                ),
            ));
        }
        Ok(Self { id, pixels })
    }

    /// Create a tile from `#`/`.` text rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileData` for characters other than `#` and `.`, rows
    /// of unequal length, or any shape rejected by [`Tile::new`]
    pub fn from_rows<S: AsRef<str>>(id: TileId, rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != size {
                return Err(invalid_tile_data(
                    0,
                    &format!(
                        "tile {id} row {} has {} pixels, expected {size}",
                        index + 1,
                        row.chars().count()
                    ),
                ));
            }
            for ch in row.chars() {
                match ch {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(invalid_tile_data(
                            0,
                            &format!("tile {id} contains unexpected pixel '{other}'"),
                        ));
                    }
                }
            }
        }
        let pixels = Array2::from_shape_vec((size, size), cells)
            .map_err(|e| invalid_tile_data(0, &format!("tile {id}: {e}")))?;
        Self::new(id, pixels)
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Number of pixels along one side
    pub fn size(&self) -> usize {
        self.pixels.nrows()
    }

    /// Current pixel grid
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Pixels of one side in natural reading order
    pub fn side(&self, side: Side) -> Vec<bool> {
        let last = self.size() - 1;
        match side {
            Side::Top => self.pixels.row(0).to_vec(),
            Side::Bottom => self.pixels.row(last).to_vec(),
            Side::Left => self.pixels.column(0).to_vec(),
            Side::Right => self.pixels.column(last).to_vec(),
        }
    }

    /// Hash of the border reading named by `kind`
    pub fn hash_of(&self, kind: EdgeKind) -> EdgeHash {
        let mut bits = self.side(kind.side());
        if kind.inversed {
            bits.reverse();
        }
        bits.into_iter()
            .fold(0, |hash, bit| (hash << 1) | EdgeHash::from(bit))
    }

    /// Unique edge kind whose reading produces `hash`
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousEdge` when several kinds produce the hash and
    /// `UnknownEdge` when none does
    pub fn kind_of_hash(&self, hash: EdgeHash) -> Result<EdgeKind> {
        let kinds: Vec<EdgeKind> = EdgeKind::ALL
            .into_iter()
            .filter(|&kind| self.hash_of(kind) == hash)
            .collect();
        match kinds.as_slice() {
            [kind] => Ok(*kind),
            [] => Err(PuzzleError::UnknownEdge {
                tile: self.id,
                hash,
            }),
            _ => Err(PuzzleError::AmbiguousEdge {
                tile: self.id,
                hash,
                kinds,
            }),
        }
    }

    /// Hashes of the four sides in natural reading order
    pub fn actual_hashes(&self) -> BTreeSet<EdgeHash> {
        EdgeKind::ALL
            .into_iter()
            .filter(|kind| !kind.inversed)
            .map(|kind| self.hash_of(kind))
            .collect()
    }

    /// Hashes of all eight border readings
    pub fn variant_hashes(&self) -> BTreeSet<EdgeHash> {
        EdgeKind::ALL
            .into_iter()
            .map(|kind| self.hash_of(kind))
            .collect()
    }

    /// Rotate the tile a quarter turn in place
    pub fn rotate(&mut self, to_left: bool) {
        self.pixels = rotate(&self.pixels, to_left);
    }

    /// Mirror the tile in place
    pub fn flip(&mut self, by_vertical: bool) {
        self.pixels = flip(&self.pixels, by_vertical);
    }

    /// Apply a single transform in place
    pub fn apply(&mut self, transform: Transform) {
        match transform {
            Transform::Rotate { to_left } => self.rotate(to_left),
            Transform::Flip { by_vertical } => self.flip(by_vertical),
        }
    }

    /// Reorient the tile until the border hashing to `hash` reads as `target`
    ///
    /// Returns the number of transforms applied, zero when the border
    /// already has the requested kind.
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousEdge`/`UnknownEdge` if the hash cannot be classified
    /// and `UnresolvedTransform` if the target is not reached within the
    /// step limit
    pub fn normalize(&mut self, hash: EdgeHash, target: EdgeKind) -> Result<usize> {
        let mut current = self.kind_of_hash(hash)?;
        let mut steps = 0;
        while let Some(step) = current.step_towards(target) {
            if steps == MAX_NORMALIZE_STEPS {
                return Err(PuzzleError::UnresolvedTransform {
                    tile: self.id,
                    current,
                    target,
                });
            }
            self.apply(step);
            steps += 1;
            current = self.kind_of_hash(hash)?;
        }
        Ok(steps)
    }

    /// Pixels without the outer border ring
    pub fn interior(&self) -> ArrayView2<'_, bool> {
        strip_border(&self.pixels, TILE_BORDER_WIDTH)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}:", self.id)?;
        for row in self.pixels.rows() {
            writeln!(f)?;
            for &pixel in row {
                f.write_str(if pixel { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Validated collection of equally sized tiles keyed by identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: BTreeMap<TileId, Tile>,
    tile_size: usize,
}

impl TileSet {
    /// Collect tiles into a set
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileData` if the set is empty, an identifier repeats,
    /// or tile sizes differ
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        let mut tile_size = None;
        for tile in tiles {
            let size = *tile_size.get_or_insert_with(|| tile.size());
            if tile.size() != size {
                return Err(invalid_tile_data(
                    0,
                    &format!(
                        "tile {} has size {}, expected {size} like the others",
                        tile.id(),
                        tile.size()
                    ),
                ));
            }
            let id = tile.id();
            if by_id.insert(id, tile).is_some() {
                return Err(invalid_tile_data(0, &format!("duplicate tile id {id}")));
            }
        }
        let tile_size = tile_size.ok_or_else(|| invalid_tile_data(0, &"no tiles given"))?;
        Ok(Self {
            tiles: by_id,
            tile_size,
        })
    }

    /// Build a set from raw pixel grids keyed by identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileData` for any grid rejected by [`Tile::new`] or
    /// any set rejected by [`TileSet::new`]
    pub fn from_grids(grids: BTreeMap<TileId, Array2<bool>>) -> Result<Self> {
        let tiles = grids
            .into_iter()
            .map(|(id, pixels)| Tile::new(id, pixels))
            .collect::<Result<Vec<_>>>()?;
        Self::new(tiles)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Tile by identifier
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Mutable tile by identifier
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Identifiers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }

    /// Tiles in ascending identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Consume the set, yielding tiles keyed by identifier
    pub fn into_tiles(self) -> BTreeMap<TileId, Tile> {
        self.tiles
    }
}
