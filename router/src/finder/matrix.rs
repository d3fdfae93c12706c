use crate::{grid::Coordinate, path::Path};

/// Route lengths between every pair of waypoints.
///
/// Lengths count points, origin included, so neighbouring waypoints are two
/// apart and a waypoint is one away from itself. Routes are computed once per
/// unordered pair and mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatrix {
    waypoints: Vec<Coordinate>,
    lengths: Vec<Option<usize>>,
}

impl RouteMatrix {
    pub(crate) fn build(
        waypoints: &[Coordinate],
        mut route: impl FnMut(Coordinate, Coordinate) -> Option<Path>,
    ) -> Self {
        let n = waypoints.len();
        let mut lengths = vec![None; n * n];

        for (i, &from) in waypoints.iter().enumerate() {
            for (j, &to) in waypoints.iter().enumerate().skip(i) {
                let length = route(from, to).map(|path| path.len());
                lengths[i * n + j] = length;
                lengths[j * n + i] = length;
            }
        }

        Self {
            waypoints: waypoints.to_vec(),
            lengths,
        }
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    pub fn size(&self) -> usize {
        self.waypoints.len()
    }

    /// `None` when the pair is unreachable or an index is out of range
    pub fn length(&self, from: usize, to: usize) -> Option<usize> {
        let n = self.size();
        if from >= n || to >= n {
            return None;
        }
        self.lengths[from * n + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        // chunks panics on 0
        self.lengths.chunks(self.size().max(1))
    }

    pub fn unreachable_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.lengths[i * n + j].is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(from: Coordinate, to: Coordinate) -> Option<Path> {
        if from.row != to.row {
            return None;
        }
        let mut path = Path::new(from);
        let step = (to.col - from.col).signum();
        let mut col = from.col;
        while col != to.col {
            col += step;
            path.push(Coordinate::new(from.row, col));
        }
        Some(path)
    }

    #[test]
    fn mirrors_pairs_and_keeps_gaps() {
        let points = [
            Coordinate::new(0, 0),
            Coordinate::new(0, 3),
            Coordinate::new(2, 0),
        ];
        let matrix = RouteMatrix::build(&points, straight);

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.length(0, 1), Some(4));
        assert_eq!(matrix.length(1, 0), Some(4));
        assert_eq!(matrix.length(2, 2), Some(1));
        assert_eq!(matrix.length(0, 2), None);
        assert_eq!(matrix.length(3, 0), None);
        assert_eq!(
            matrix.unreachable_pairs().collect::<Vec<_>>(),
            vec![(0, 2), (1, 2)]
        );
        assert_eq!(matrix.rows().count(), 3);
    }

    #[test]
    fn routes_each_unordered_pair_once() {
        let points = [Coordinate::new(0, 0), Coordinate::new(0, 1)];
        let mut calls = 0;
        RouteMatrix::build(&points, |from, to| {
            calls += 1;
            straight(from, to)
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn unreachable_pairs_outlive_the_call() {
        let pairs: Vec<_> = {
            let matrix = RouteMatrix::build(
                &[Coordinate::new(0, 0), Coordinate::new(1, 0)],
                straight,
            );
            matrix.unreachable_pairs().collect()
        };
        assert_eq!(pairs, vec![(0, 1)]);
    }
}
