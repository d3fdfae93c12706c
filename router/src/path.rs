use std::collections::HashSet;

use crate::error::{Result, RouteError};
use crate::grid::{Coordinate, Movement};

/// Route in progress: an append-only, never-empty sequence of points plus a
/// membership index for O(1) lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Coordinate>,
    index: HashSet<Coordinate>,
}

#[allow(clippy::len_without_is_empty)]
impl Path {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            points: vec![origin],
            index: HashSet::from([origin]),
        }
    }

    /// Appends `point` if it is one king move away from the current end.
    ///
    /// This only rules out jumps; whether a diagonal step is allowed is
    /// decided by whoever drives the path under a [`Movement`].
    pub fn append(&mut self, point: Coordinate) -> Result<()> {
        let last = self.last_point();
        if last.chebyshev_distance(point) != 1 {
            return Err(RouteError::NonAdjacentStep {
                from: last,
                to: point,
            });
        }

        self.push(point);
        Ok(())
    }

    /// unchecked append for candidates the search already validated
    pub(crate) fn push(&mut self, point: Coordinate) {
        self.points.push(point);
        self.index.insert(point);
    }

    pub(crate) fn from_points(points: Vec<Coordinate>) -> Self {
        debug_assert!(!points.is_empty());
        let index = points.iter().copied().collect();
        Self { points, index }
    }

    pub fn first_point(&self) -> Coordinate {
        self.points[0]
    }

    pub fn last_point(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.index.contains(&Coordinate::new(row, col))
    }

    pub fn contains_point(&self, point: Coordinate) -> bool {
        self.index.contains(&point)
    }

    /// number of points, origin included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn moves(&self) -> usize {
        self.points.len() - 1
    }

    /// independent deep copy; later appends to either side are not shared
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }

    pub fn is_connected(&self, movement: Movement) -> bool {
        self.points
            .windows(2)
            .all(|pair| movement.is_step(pair[0], pair[1]))
    }
}
