//! Marker footprint search over every orientation of a stitched image
//!
//! The image is never copied per orientation: an oriented view translates
//! each probe back to source coordinates, and covered pixels are flagged in
//! a single overlay shared by all orientations. Roughness is the number of
//! set pixels no marker occurrence covers.

use crate::algorithm::coverage::CoverageMask;
use crate::analysis::stitching::Image;
use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Orientation, OrientedView};

/// Fixed footprint of marked offsets searched for in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    offsets: Vec<(usize, usize)>,
    rows: usize,
    cols: usize,
}

impl MarkerPattern {
    /// Parse a footprint where `#` marks a required pixel
    ///
    /// Any other character is a wildcard. Width is the longest line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no position is marked
    pub fn parse(text: &str) -> Result<Self> {
        let pattern = Self::from_text(text);
        if pattern.offsets.is_empty() {
            return Err(invalid_parameter(
                "marker",
                &text.trim(),
                &"footprint has no '#' positions",
            ));
        }
        Ok(pattern)
    }

    /// The sea monster footprint
    pub fn sea_monster() -> Self {
        Self::from_text(SEA_MONSTER)
    }

    fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        // Leading and trailing blank lines do not belong to the footprint
        let first = lines.iter().position(|line| !line.trim().is_empty());
        let last = lines.iter().rposition(|line| !line.trim().is_empty());
        let body: &[&str] = match (first, last) {
            (Some(first), Some(last)) => lines.get(first..=last).unwrap_or_default(),
            _ => &[],
        };

        let offsets = body
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        let cols = body
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            offsets,
            rows: body.len(),
            cols,
        }
    }

    /// Marked offsets, row-major
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Footprint dimensions (rows, cols)
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of marked positions
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no position is marked
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// One marker occurrence, anchored in the oriented view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerMatch {
    /// Orientation the image was viewed in
    pub orientation: Orientation,
    /// Anchor row in the oriented view
    pub row: usize,
    /// Anchor column in the oriented view
    pub col: usize,
}

/// Accumulates marker coverage over any number of orientations
pub struct PatternScanner<'a> {
    image: &'a Image,
    marker: &'a MarkerPattern,
    coverage: CoverageMask,
    matches: Vec<MarkerMatch>,
}

impl<'a> PatternScanner<'a> {
    /// Prepare a scan with nothing covered
    pub fn new(image: &'a Image, marker: &'a MarkerPattern) -> Self {
        let (rows, cols) = image.dim();
        Self {
            image,
            marker,
            coverage: CoverageMask::new(rows, cols),
            matches: Vec::new(),
        }
    }

    /// Slide the marker over one orientation, covering every match
    ///
    /// Returns the number of occurrences found in this orientation
    pub fn scan_orientation(&mut self, orientation: Orientation) -> usize {
        let view = OrientedView::new(self.image, orientation);
        let (view_rows, view_cols) = view.dim();
        let (marker_rows, marker_cols) = self.marker.dims();
        if marker_rows > view_rows || marker_cols > view_cols {
            return 0;
        }

        let mut found = 0;
        for row in 0..=view_rows - marker_rows {
            for col in 0..=view_cols - marker_cols {
                let hit = self
                    .marker
                    .offsets()
                    .iter()
                    .all(|&(dr, dc)| view.get(row + dr, col + dc) == Some(&true));
                if !hit {
                    continue;
                }

                for &(dr, dc) in self.marker.offsets() {
                    let (source_row, source_col) = view.source_index(row + dr, col + dc);
                    self.coverage.cover(source_row, source_col);
                }
                self.matches.push(MarkerMatch {
                    orientation,
                    row,
                    col,
                });
                found += 1;
            }
        }

        if found > 0 {
            tracing::debug!(?orientation, found, "markers found");
        }
        found
    }

    /// Scan all eight orientations
    ///
    /// Returns the total number of occurrences found
    pub fn scan_all(&mut self) -> usize {
        Orientation::ALL
            .into_iter()
            .map(|orientation| self.scan_orientation(orientation))
            .sum()
    }

    /// Set pixels not covered by any occurrence found so far
    pub fn roughness(&self) -> usize {
        self.image
            .indexed_iter()
            .filter(|&((row, col), &pixel)| pixel && !self.coverage.is_covered(row, col))
            .count()
    }

    /// Covered-pixel overlay in source coordinates
    pub const fn coverage(&self) -> &CoverageMask {
        &self.coverage
    }

    /// Every occurrence found so far
    pub fn matches(&self) -> &[MarkerMatch] {
        &self.matches
    }

    /// Finish scanning, keeping the overlay and the occurrences
    pub fn finish(self) -> (CoverageMask, Vec<MarkerMatch>) {
        (self.coverage, self.matches)
    }
}
