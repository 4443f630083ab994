use bitvec::prelude::*;
use std::fmt;

/// Fixed-size overlay recording which image pixels a marker covers
///
/// Positions are stored row-major in source-image coordinates, so flags set
/// while scanning one orientation stay put when the next one is tried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CoverageMask {
    /// Create an overlay with nothing covered
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Overlay dimensions (rows, cols)
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Flag a position as covered
    ///
    /// Returns true when the position was not covered before; positions
    /// outside the overlay are ignored
    pub fn cover(&mut self, row: usize, col: usize) -> bool {
        let Some(index) = self.index(row, col) else {
            return false;
        };
        let newly = !self.is_covered(row, col);
        self.bits.set(index, true);
        newly
    }

    /// Test whether a position is covered
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if nothing is covered
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count covered positions
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Covered positions in row-major order
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.bits
            .iter_ones()
            .map(|index| (index / self.cols, index % self.cols))
            .collect()
    }
}

impl fmt::Display for CoverageMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoverageMask({}x{}, {} covered)",
            self.rows,
            self.cols,
            self.count()
        )
    }
}
