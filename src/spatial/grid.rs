//! Orientation transforms shared by tiles and stitched images
//!
//! Rotations and mirror flips rebuild a grid through transposed and inverted
//! views. [`Orientation`] names the eight symmetries of a rectangle and maps
//! coordinates of an oriented view back to the untouched source grid, so a
//! large image can be inspected in any orientation without being copied.

use ndarray::{Array2, ArrayView2, Axis, Slice};

/// Single rebuild of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Quarter turn, counter-clockwise when `to_left`
    Rotate {
        /// Counter-clockwise rather than clockwise
        to_left: bool,
    },
    /// Mirror flip, reversing row order when `by_vertical`, otherwise each row
    Flip {
        /// Swap top and bottom rather than left and right
        by_vertical: bool,
    },
}

impl Transform {
    /// Apply the transform, returning the rebuilt grid
    pub fn apply<T: Clone>(self, grid: &Array2<T>) -> Array2<T> {
        match self {
            Self::Rotate { to_left } => rotate(grid, to_left),
            Self::Flip { by_vertical } => flip(grid, by_vertical),
        }
    }
}

/// Rotate a grid by a quarter turn
///
/// Left rotation moves the first column into the last row; right rotation
/// moves the first column into the first row, reversed.
pub fn rotate<T: Clone>(grid: &Array2<T>, to_left: bool) -> Array2<T> {
    let mut view = grid.t();
    // new[r][c] = old[c][cols-1-r] to the left, old[rows-1-c][r] to the right
    if to_left {
        view.invert_axis(Axis(0));
    } else {
        view.invert_axis(Axis(1));
    }
    view.to_owned()
}

/// Mirror a grid across one axis
pub fn flip<T: Clone>(grid: &Array2<T>, by_vertical: bool) -> Array2<T> {
    let mut view = grid.view();
    view.invert_axis(if by_vertical { Axis(0) } else { Axis(1) });
    view.to_owned()
}

/// View of a grid without its outer `width` rows and columns
pub fn strip_border<T>(grid: &Array2<T>, width: usize) -> ArrayView2<'_, T> {
    let (rows, cols) = grid.dim();
    let (row_range, col_range) = if rows < 2 * width || cols < 2 * width {
        (0..0, 0..0)
    } else {
        (width..rows - width, width..cols - width)
    };
    grid.slice_axis(Axis(0), Slice::from(row_range))
        .slice_axis_move(Axis(1), Slice::from(col_range))
}

/// One of the eight symmetries of a rectangular grid
///
/// The view is built by optionally mirroring left to right, then rotating
/// left `quarter_turns` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Orientation {
    /// Mirror each row before rotating
    pub mirrored: bool,
    /// Number of left quarter turns, 0 to 3
    pub quarter_turns: u8,
}

impl Orientation {
    /// Untransformed view
    pub const IDENTITY: Self = Self::new(false, 0);

    /// All eight orientations, unmirrored first
    pub const ALL: [Self; 8] = [
        Self::new(false, 0),
        Self::new(false, 1),
        Self::new(false, 2),
        Self::new(false, 3),
        Self::new(true, 0),
        Self::new(true, 1),
        Self::new(true, 2),
        Self::new(true, 3),
    ];

    /// Build an orientation; turns wrap modulo four
    pub const fn new(mirrored: bool, quarter_turns: u8) -> Self {
        Self {
            mirrored,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// Dimensions of the oriented view of a `(rows, cols)` grid
    pub const fn dims(self, source: (usize, usize)) -> (usize, usize) {
        if self.quarter_turns.is_multiple_of(2) {
            source
        } else {
            (source.1, source.0)
        }
    }

    /// Map a position in the oriented view back to the source grid
    pub const fn source_index(self, index: (usize, usize), source: (usize, usize)) -> (usize, usize) {
        let (mut row, mut col) = index;
        let (mut rows, mut cols) = self.dims(source);
        let mut turns = 0;
        while turns < self.quarter_turns {
            // Undo one left turn: new[r][c] = old[c][old_cols-1-r], old_cols = rows
            let previous_row = col;
            col = rows - 1 - row;
            row = previous_row;
            let previous_rows = rows;
            rows = cols;
            cols = previous_rows;
            turns += 1;
        }
        if self.mirrored {
            col = cols - 1 - col;
        }
        (row, col)
    }

    /// Physical transforms producing this orientation, in application order
    pub fn transforms(self) -> Vec<Transform> {
        let mut steps = Vec::with_capacity(4);
        if self.mirrored {
            steps.push(Transform::Flip { by_vertical: false });
        }
        for _ in 0..self.quarter_turns {
            steps.push(Transform::Rotate { to_left: true });
        }
        steps
    }

    /// Materialize the oriented grid
    pub fn apply<T: Clone>(self, grid: &Array2<T>) -> Array2<T> {
        self.transforms()
            .into_iter()
            .fold(grid.clone(), |current, step| step.apply(&current))
    }
}

/// Read-only oriented window over a grid
#[derive(Debug, Clone, Copy)]
pub struct OrientedView<'a, T> {
    source: &'a Array2<T>,
    orientation: Orientation,
}

impl<'a, T> OrientedView<'a, T> {
    /// Wrap a grid in the given orientation
    pub const fn new(source: &'a Array2<T>, orientation: Orientation) -> Self {
        Self {
            source,
            orientation,
        }
    }

    /// Orientation of this view
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Dimensions as seen through the view
    pub fn dim(&self) -> (usize, usize) {
        self.orientation.dims(self.source.dim())
    }

    /// Source grid position behind a view position
    pub fn source_index(&self, row: usize, col: usize) -> (usize, usize) {
        self.orientation
            .source_index((row, col), self.source.dim())
    }

    /// Element at a view position, `None` outside the view
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        let (rows, cols) = self.dim();
        if row >= rows || col >= cols {
            return None;
        }
        self.source.get(self.source_index(row, col))
    }
}
