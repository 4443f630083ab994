use std::fmt;

use crate::{
    algorithm::assembly::{GridAssembler, Layout},
    algorithm::coverage::CoverageMask,
    algorithm::neighbors::NeighborGraph,
    analysis::patterns::{MarkerMatch, MarkerPattern, PatternScanner},
    analysis::stitching::{Image, count_set, stitch},
    io::error::Result,
    spatial::tiles::TileSet,
};

/// Phases of a solve, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Pairwise border comparison
    Linking,
    /// Orientation and placement of every tile
    Assembling,
    /// Joining tile interiors into one image
    Stitching,
    /// Marker search over all orientations
    Scanning,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 4] = [
        Self::Linking,
        Self::Assembling,
        Self::Stitching,
        Self::Scanning,
    ];

    /// Number of stages completed before this one starts
    pub const fn position(self) -> usize {
        match self {
            Self::Linking => 0,
            Self::Assembling => 1,
            Self::Stitching => 2,
            Self::Scanning => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Linking => "linking",
            Self::Assembling => "assembling",
            Self::Stitching => "stitching",
            Self::Scanning => "scanning",
        };
        f.write_str(label)
    }
}

/// Everything a solve produces
#[derive(Debug, Clone)]
pub struct Solution {
    /// Product of the corner tile identifiers
    pub checksum: u64,
    /// Set pixels not covered by any marker
    pub roughness: usize,
    /// Stitched image in the root tile's orientation
    pub image: Image,
    /// Marker-covered pixels of `image`
    pub coverage: CoverageMask,
    /// Every marker occurrence found
    pub markers: Vec<MarkerMatch>,
    /// Oriented tiles and their coordinates
    pub layout: Layout,
    /// Adjacency discovered between tiles
    pub graph: NeighborGraph,
}

/// Runs linking, assembly, stitching and scanning over one tile set
pub struct JigsawSolver {
    tiles: TileSet,
    marker: MarkerPattern,
}

impl JigsawSolver {
    /// Prepare a solve searching for the sea monster footprint
    pub fn new(tiles: TileSet) -> Self {
        Self {
            tiles,
            marker: MarkerPattern::sea_monster(),
        }
    }

    /// Search for a different marker footprint
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPattern) -> Self {
        self.marker = marker;
        self
    }

    /// Tiles to be solved
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Solve without stage notifications
    ///
    /// # Errors
    ///
    /// Returns any error of [`JigsawSolver::solve_with`]
    pub fn solve(self) -> Result<Solution> {
        self.solve_with(|_| {})
    }

    /// Solve, calling `on_stage` as each stage begins
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage: ambiguous adjacency while
    /// linking, missing corners for the checksum, orientation or placement
    /// errors during assembly and layout defects while stitching
    pub fn solve_with<F>(self, mut on_stage: F) -> Result<Solution>
    where
        F: FnMut(Stage),
    {
        let count = self.tiles.len();
        let side = count.isqrt();
        if side * side != count {
            tracing::warn!(tiles = count, "tile count is not a perfect square");
        }

        on_stage(Stage::Linking);
        let graph = NeighborGraph::build(&self.tiles)?;
        let checksum = graph.corner_checksum()?;

        on_stage(Stage::Assembling);
        let layout = GridAssembler::new(&graph).assemble(self.tiles)?;

        on_stage(Stage::Stitching);
        let image = stitch(&layout)?;

        on_stage(Stage::Scanning);
        let mut scanner = PatternScanner::new(&image, &self.marker);
        scanner.scan_all();
        let roughness = scanner.roughness();
        let (coverage, markers) = scanner.finish();

        tracing::info!(
            checksum,
            roughness,
            markers = markers.len(),
            set_pixels = count_set(&image),
            "solve finished"
        );

        Ok(Solution {
            checksum,
            roughness,
            image,
            coverage,
            markers,
            layout,
            graph,
        })
    }
}
