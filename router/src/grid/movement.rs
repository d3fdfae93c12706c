use super::coordinate::Coordinate;

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Which neighbor moves a route may take.
///
/// Neighbors are always enumerated in the order of [`Movement::offsets`]:
/// down, up, right, left, then the diagonals down-right, up-left, up-right,
/// down-left. Route searches claim contested cells in this order, so it is
/// part of the observable behavior and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    Orthogonal,
    Diagonal,
}

impl Movement {
    pub fn from_diagonal(diagonal: bool) -> Self {
        if diagonal {
            Self::Diagonal
        } else {
            Self::Orthogonal
        }
    }

    pub fn allows_diagonal(self) -> bool {
        matches!(self, Self::Diagonal)
    }

    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Orthogonal => &ORTHOGONAL,
            Self::Diagonal => &DIAGONAL,
        }
    }

    /// neighbor candidates of `from`, unfiltered (may fall outside any grid)
    pub fn neighbors(self, from: Coordinate) -> impl Iterator<Item = Coordinate> {
        self.offsets().iter().map(move |&offset| from + offset)
    }

    /// whether `from -> to` is a single legal move
    pub fn is_step(self, from: Coordinate, to: Coordinate) -> bool {
        match self {
            Self::Orthogonal => from.manhattan_distance(to) == 1,
            Self::Diagonal => from.chebyshev_distance(to) == 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Diagonal => "diagonal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_counts() {
        let c = Coordinate::new(2, 2);
        assert_eq!(Movement::Orthogonal.neighbors(c).count(), 4);
        assert_eq!(Movement::Diagonal.neighbors(c).count(), 8);
    }

    #[test]
    fn diagonal_extends_orthogonal_order() {
        let c = Coordinate::new(0, 0);
        let ortho: Vec<_> = Movement::Orthogonal.neighbors(c).collect();
        let diag: Vec<_> = Movement::Diagonal.neighbors(c).take(4).collect();
        assert_eq!(ortho, diag);
        assert_eq!(ortho[0], Coordinate::new(1, 0));
    }

    #[test]
    fn steps() {
        let a = Coordinate::new(1, 1);
        assert!(Movement::Orthogonal.is_step(a, Coordinate::new(1, 2)));
        assert!(!Movement::Orthogonal.is_step(a, Coordinate::new(2, 2)));
        assert!(Movement::Diagonal.is_step(a, Coordinate::new(2, 2)));
        assert!(!Movement::Diagonal.is_step(a, a));
        assert!(!Movement::Diagonal.is_step(a, Coordinate::new(3, 1)));
    }
}
