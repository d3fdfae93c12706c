use std::fmt;
use std::ops::Add;

/// cell address as (row, col); signed so that neighbor candidates of border
/// cells stay representable and are rejected by bounds checks instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: isize,
    pub col: isize,
}

impl Coordinate {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub(crate) fn to_index(self, width: usize) -> usize {
        self.row as usize * width + self.col as usize
    }

    pub(crate) fn from_index(index: usize, width: usize) -> Self {
        Self::new((index / width) as isize, (index % width) as isize)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn chebyshev_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl Add<(isize, isize)> for Coordinate {
    type Output = Self;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<(isize, isize)> for Coordinate {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
