//! Command-line interface for batch solving of tile description files

use crate::algorithm::executor::JigsawSolver;
use crate::analysis::patterns::MarkerPattern;
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::input::{load_marker, load_tiles};
use crate::io::logging::level_for;
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "jigsawtile")]
#[command(
    author,
    version,
    about = "Assemble edge-matching tiles and measure the roughness left around markers"
)]
/// Command-line arguments for the tile assembly tool
pub struct Cli {
    /// Tile description file or directory of `.txt` files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Marker footprint file, `#` marks required pixels (default: sea monster)
    #[arg(short, long, value_name = "FILE")]
    pub marker: Option<PathBuf>,

    /// Export the stitched image with markers highlighted as PNG
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> Level {
        level_for(self.verbose, self.quiet)
    }
}

/// Result of solving one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input file
    pub path: PathBuf,
    /// Product of corner tile identifiers
    pub checksum: u64,
    /// Set pixels outside every marker
    pub roughness: usize,
    /// Number of marker occurrences
    pub markers: usize,
    /// Exported image, when requested
    pub exported: Option<PathBuf>,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: checksum={} roughness={}",
            self.path.display(),
            self.checksum,
            self.roughness
        )
    }
}

/// Orchestrates batch solving of tile files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every file selected by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target or marker is invalid, or the first
    /// error raised while solving a file
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            tracing::warn!(path = %self.cli.target.display(), "no tile files found");
            return Ok(Vec::new());
        }

        let marker = match &self.cli.marker {
            Some(path) => load_marker(path)?,
            None => MarkerPattern::sea_monster(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            reports.push(self.process_file(file, index, &marker)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a tile file or a directory of tile files",
            ))
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        marker: &MarkerPattern,
    ) -> Result<FileReport> {
        let start_time = Instant::now();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let tiles = load_tiles(input_path)?;
        tracing::info!(path = %input_path.display(), tiles = tiles.len(), "solving");

        let progress = &mut self.progress_manager;
        let solution = JigsawSolver::new(tiles)
            .with_marker(marker.clone())
            .solve_with(|stage| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_stage(index, stage);
                }
            })?;

        let exported = if self.cli.export {
            let output_path = Self::export_path(input_path);
            export_image_as_png(&solution.image, &solution.coverage, &output_path)?;
            Some(output_path)
        } else {
            None
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(FileReport {
            path: input_path.to_path_buf(),
            checksum: solution.checksum,
            roughness: solution.roughness,
            markers: solution.markers.len(),
            exported,
        })
    }

    /// Location of the exported image for an input file
    pub fn export_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
