use std::time::Duration;

use crate::{
    grid::{Coordinate, Grid, Movement},
    path::Path,
};

/// A search strategy over a borrowed grid.
///
/// Every move costs one step. Implementations return the first route that
/// reaches `target`, or `None` when the target cannot be reached; they never
/// mutate the grid.
pub trait RouteAlgorithm {
    fn find_route(
        &self,
        grid: &Grid,
        movement: Movement,
        start: Coordinate,
        target: Coordinate,
    ) -> Option<Path>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct RouteResult {
    pub path: Option<Path>,
    pub planning_time: Duration,
}

impl RouteResult {
    pub fn new(path: Option<Path>, planning_time: Duration) -> Self {
        Self {
            path,
            planning_time,
        }
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// moves taken by the route, if one was found
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(Path::moves)
    }
}

pub(crate) enum Shortcut {
    Resolved(Option<Path>),
    Search,
}

/// answers that need no search at all
pub(crate) fn shortcut(grid: &Grid, start: Coordinate, target: Coordinate) -> Shortcut {
    if !grid.contains(start) || !grid.contains(target) {
        log::debug!("{} -> {} leaves the grid, no route", start, target);
        return Shortcut::Resolved(None);
    }

    if start == target {
        return Shortcut::Resolved(Some(Path::new(start)));
    }

    if !grid.is_passable_at(target) {
        log::debug!("target {} is blocked, no route", target);
        return Shortcut::Resolved(None);
    }

    Shortcut::Search
}

/// fills `out` with the passable, unclaimed neighbors of `from`, in
/// enumeration order
pub(crate) fn open_neighbors(
    grid: &Grid,
    movement: Movement,
    from: Coordinate,
    is_claimed: impl Fn(Coordinate) -> bool,
    out: &mut Vec<Coordinate>,
) {
    out.clear();
    out.extend(
        movement
            .neighbors(from)
            .filter(|&candidate| grid.is_passable_at(candidate) && !is_claimed(candidate)),
    );
}
