//! Tile description parsing
//!
//! Tiles are written as a `Tile <id>:` header followed by square rows of
//! `#` and `.`, with blocks separated by blank lines.

use std::path::Path;

use crate::analysis::patterns::MarkerPattern;
use crate::io::error::{PuzzleError, Result, WithContext, invalid_tile_data};
use crate::spatial::tiles::{Tile, TileId, TileSet};

struct Block<'a> {
    id: TileId,
    header_line: usize,
    rows: Vec<&'a str>,
}

impl Block<'_> {
    fn into_tile(self) -> Result<Tile> {
        Tile::from_rows(self.id, &self.rows).map_err(|error| at_line(error, self.header_line))
    }
}

/// Parse every tile block of a description
///
/// # Errors
///
/// Returns `InvalidTileData` with the offending line for malformed headers,
/// rows before any header, bad pixels or non-square tiles, and for sets with
/// duplicate identifiers or mixed tile sizes
pub fn parse_tiles(text: &str) -> Result<TileSet> {
    let mut tiles = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim_end();

        if line.is_empty() {
            if let Some(block) = current.take() {
                tiles.push(block.into_tile()?);
            }
            continue;
        }

        if line.starts_with("Tile") {
            if let Some(block) = current.take() {
                tiles.push(block.into_tile()?);
            }
            current = Some(Block {
                id: parse_header(line, line_number)?,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(block) => block.rows.push(line),
            None => {
                return Err(invalid_tile_data(
                    line_number,
                    &"pixel row found before any 'Tile <id>:' header",
                ));
            }
        }
    }

    if let Some(block) = current.take() {
        tiles.push(block.into_tile()?);
    }

    tracing::debug!(tiles = tiles.len(), "tile descriptions parsed");
    TileSet::new(tiles)
}

/// Read and parse a tile description file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and every error of
/// [`parse_tiles`], tagged with the file path
pub fn load_tiles(path: &Path) -> Result<TileSet> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tiles",
        source,
    })?;
    parse_tiles(&text).with_path(path)
}

/// Read a marker footprint file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `InvalidParameter` if
/// it marks no position
pub fn load_marker(path: &Path) -> Result<MarkerPattern> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read marker",
        source,
    })?;
    MarkerPattern::parse(&text)
}

fn parse_header(line: &str, line_number: usize) -> Result<TileId> {
    line.strip_prefix("Tile")
        .and_then(|rest| rest.trim().strip_suffix(':'))
        .and_then(|id| id.trim().parse::<TileId>().ok())
        .ok_or_else(|| {
            invalid_tile_data(
                line_number,
                &format!("expected 'Tile <id>:' header, found '{line}'"),
            )
        })
}

fn at_line(error: PuzzleError, line_number: usize) -> PuzzleError {
    match error {
        PuzzleError::InvalidTileData { path, line: 0, reason } => PuzzleError::InvalidTileData {
            path,
            line: line_number,
            reason,
        },
        other => other,
    }
}
