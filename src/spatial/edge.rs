//! Border classification for square tiles
//!
//! Every border of a tile can be read in eight ways: four geometric sides,
//! each in natural or reversed pixel order. An [`EdgeKind`] names one such
//! reading through three independent flags, and the difference between two
//! kinds determines which single transform moves a tile towards the other.

use std::fmt;

use crate::spatial::grid::Transform;

/// Integer encoding of a border's pixels, first pixel in the most significant bit
pub type EdgeHash = u64;

/// Geometric side of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
    /// Last column, read top to bottom
    Right,
}

impl Side {
    /// All four sides in a fixed order
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// One of the eight readings of a tile border
///
/// - `vertical`: the border is the top or bottom row rather than a column
/// - `higher`: the border is the top row or right column
/// - `inversed`: pixels are read in reverse order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKind {
    /// Top/bottom rather than left/right
    pub vertical: bool,
    /// Top/right rather than bottom/left
    pub higher: bool,
    /// Reversed pixel order
    pub inversed: bool,
}

impl EdgeKind {
    /// Left column, natural order
    pub const LEFT: Self = Self::new(false, false, false);
    /// Bottom row, natural order
    pub const BOTTOM: Self = Self::new(true, false, false);
    /// Right column, natural order
    pub const RIGHT: Self = Self::new(false, true, false);
    /// Top row, natural order
    pub const TOP: Self = Self::new(true, true, false);

    /// Every edge kind, natural readings first
    pub const ALL: [Self; 8] = [
        Self::LEFT,
        Self::BOTTOM,
        Self::RIGHT,
        Self::TOP,
        Self::LEFT.inverse(),
        Self::BOTTOM.inverse(),
        Self::RIGHT.inverse(),
        Self::TOP.inverse(),
    ];

    /// Build a kind from its three flags
    pub const fn new(vertical: bool, higher: bool, inversed: bool) -> Self {
        Self {
            vertical,
            higher,
            inversed,
        }
    }

    /// Natural reading of a geometric side
    pub const fn actual(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }

    /// Geometric side this kind reads
    pub const fn side(self) -> Side {
        match (self.vertical, self.higher) {
            (true, true) => Side::Top,
            (true, false) => Side::Bottom,
            (false, true) => Side::Right,
            (false, false) => Side::Left,
        }
    }

    /// Same side read in the other direction
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.vertical, self.higher, !self.inversed)
    }

    /// Facing side on the same axis, same reading direction
    ///
    /// A neighbor docking against this edge must present the opposite kind.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.vertical, !self.higher, self.inversed)
    }

    /// Flags that differ between two kinds
    pub const fn diff(self, other: Self) -> EdgeDiff {
        EdgeDiff {
            vertical: self.vertical != other.vertical,
            higher: self.higher != other.higher,
            inversed: self.inversed != other.inversed,
        }
    }

    /// Single transform moving a border of this kind towards `target`
    ///
    /// Returns `None` once the kinds are equal. When every flag differs a
    /// single rotation is enough, since the two mirror flips it would
    /// otherwise take compose into one.
    pub const fn step_towards(self, target: Self) -> Option<Transform> {
        let diff = self.diff(target);
        if diff.is_empty() {
            None
        } else if diff.is_full() {
            Some(Transform::Rotate {
                to_left: self.vertical,
            })
        } else if diff.vertical {
            Some(Transform::Rotate {
                to_left: !self.vertical,
            })
        } else if diff.higher {
            Some(Transform::Flip {
                by_vertical: self.vertical,
            })
        } else {
            Some(Transform::Flip {
                by_vertical: !self.vertical,
            })
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reading = if self.inversed { "inversed" } else { "actual" };
        write!(f, "{reading} {}", self.side())
    }
}

/// Flag-wise difference between two edge kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDiff {
    /// Axes differ
    pub vertical: bool,
    /// Positions on the axis differ
    pub higher: bool,
    /// Reading directions differ
    pub inversed: bool,
}

impl EdgeDiff {
    /// No flag differs
    pub const fn is_empty(self) -> bool {
        !self.vertical && !self.higher && !self.inversed
    }

    /// Every flag differs
    pub const fn is_full(self) -> bool {
        self.vertical && self.higher && self.inversed
    }

    /// Number of differing flags
    pub const fn count(self) -> usize {
        self.vertical as usize + self.higher as usize + self.inversed as usize
    }
}
