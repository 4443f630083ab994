//! Error types and context management for assembly operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::edge::{EdgeHash, EdgeKind};
use crate::spatial::tiles::TileId;

/// Main error type for all assembly operations
#[derive(Debug)]
pub enum PuzzleError {
    /// An edge hash matches more than one edge kind of the same tile
    ///
    /// Happens for palindromic borders or tiles with two identical sides.
    /// Such tiles cannot be oriented unambiguously.
    AmbiguousEdge {
        /// Tile whose edge was looked up
        tile: TileId,
        /// Hash that was looked up
        hash: EdgeHash,
        /// Every edge kind producing that hash
        kinds: Vec<EdgeKind>,
    },

    /// An edge hash matches no edge kind of the tile
    UnknownEdge {
        /// Tile whose edge was looked up
        tile: TileId,
        /// Hash that was looked up
        hash: EdgeHash,
    },

    /// Two tiles share more than one border hash
    AmbiguousAdjacency {
        /// Lower identifier of the pair
        first: TileId,
        /// Higher identifier of the pair
        second: TileId,
        /// All shared hashes
        shared: Vec<EdgeHash>,
    },

    /// Orientation could not be brought to the requested edge kind
    UnresolvedTransform {
        /// Tile being normalized
        tile: TileId,
        /// Edge kind the hash had when the step limit ran out
        current: EdgeKind,
        /// Requested edge kind
        target: EdgeKind,
    },

    /// Traversal finished while some tiles were never reached
    IncompleteAssembly {
        /// Number of tiles that received a coordinate
        placed: usize,
        /// Number of input tiles
        total: usize,
        /// Identifiers of tiles that were never placed
        missing: Vec<TileId>,
    },

    /// Placed coordinates do not form a dense rectangle
    MalformedLayout {
        /// Description of the defect
        reason: String,
    },

    /// Adjacency graph has no tile with exactly two neighbors
    MissingCorners {
        /// Number of input tiles
        tiles: usize,
    },

    /// Tile description could not be parsed or validated
    InvalidTileData {
        /// Source file, when known
        path: Option<PathBuf>,
        /// 1-based line number, 0 when the defect is not tied to a line
        line: usize,
        /// Description of what's wrong
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save stitched image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousEdge { tile, hash, kinds } => {
                let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Ambiguous edge on tile {tile}: hash {hash} matches {}",
                    names.join(", ")
                )
            }
            Self::UnknownEdge { tile, hash } => {
                write!(f, "Tile {tile} has no edge with hash {hash}")
            }
            Self::AmbiguousAdjacency {
                first,
                second,
                shared,
            } => {
                write!(
                    f,
                    "Ambiguous adjacency between tiles {first} and {second}: {} shared borders {shared:?}",
                    shared.len()
                )
            }
            Self::UnresolvedTransform {
                tile,
                current,
                target,
            } => {
                write!(
                    f,
                    "Cannot orient tile {tile}: edge stuck at {current}, expected {target}"
                )
            }
            Self::IncompleteAssembly {
                placed,
                total,
                missing,
            } => {
                write!(
                    f,
                    "Incomplete assembly: placed {placed} of {total} tiles (unreached: {missing:?})"
                )
            }
            Self::MalformedLayout { reason } => write!(f, "Malformed layout: {reason}"),
            Self::MissingCorners { tiles } => {
                write!(f, "No corner tiles found among {tiles} tiles")
            }
            Self::InvalidTileData { path, line, reason } => {
                let location = path
                    .as_ref()
                    .map_or_else(|| "<input>".to_string(), |p| p.display().to_string());
                if *line > 0 {
                    write!(f, "Invalid tile data in '{location}' at line {line}: {reason}")
                } else {
                    write!(f, "Invalid tile data in '{location}': {reason}")
                }
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for assembly results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File being processed
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation being processed
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-bound errors benefit from path context
            match &mut error {
                PuzzleError::InvalidTileData { path, .. } if path.is_none() => {
                    path.clone_from(&context.path);
                }
                PuzzleError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = &context.path {
                        path.clone_from(context_path);
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: &Path) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile data error not yet tied to a file
pub fn invalid_tile_data(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidTileData {
        path: None,
        line,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
