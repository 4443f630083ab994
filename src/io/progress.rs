//! Multi-file progress tracking with automatic batching for large sets

use crate::algorithm::executor::Stage;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one file: name, completed stages, current stage label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileState {
    /// File name shown next to the bar
    pub name: String,
    /// Number of stages finished
    pub completed: usize,
    /// Label of the running stage, or a completion note
    pub label: String,
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches and a rolling window of the
/// most recent files plus a batch bar for large ones
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Create bars for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Batch mode keeps large directories from flooding the terminal
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(Stage::ALL.len() as u64);
            pb.set_style(STAGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files announced in [`ProgressManager::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Register a file that is about to be solved
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                completed: 0,
                label: String::from("queued"),
            };
        }
        self.update_bars();
    }

    /// Report that a file entered a solver stage
    pub fn update_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.completed = stage.position();
            state.label = stage.to_string();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.completed = Stage::ALL.len();
            state.label = format!("done in {elapsed:.1?}");
        }
        self.update_bars();
    }

    /// Display state of a file, if it was started
    pub fn file_state(&self, index: usize) -> Option<&FileState> {
        self.file_states.get(index)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        // Rolling window over the most recent files
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, state) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                bar.set_position(state.completed as u64);
                bar.set_prefix(state.name.clone());
                bar.set_message(state.label.clone());
            }
        }

        for bar_index in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                bar.set_position(0);
                bar.set_prefix(String::new());
                bar.set_message(String::new());
            }
        }
    }
}
