mod matrix;

use std::time::Instant;

use crate::{
    algorithms::routing::{FrontierExpansion, RouteAlgorithm, RouteResult},
    grid::{Coordinate, Grid, Movement},
    path::Path,
};

pub use matrix::RouteMatrix;

/// Binds a read-only grid, a movement mode and a search strategy.
///
/// The grid is borrowed for the finder's lifetime, so it cannot be stamped
/// while routes are being searched. All search state lives inside a single
/// call.
pub struct RouteFinder<'g, A: RouteAlgorithm = FrontierExpansion> {
    grid: &'g Grid,
    movement: Movement,
    algorithm: A,
}

impl<'g> RouteFinder<'g, FrontierExpansion> {
    pub fn new(grid: &'g Grid, movement: Movement) -> Self {
        Self::with_algorithm(grid, movement, FrontierExpansion)
    }
}

impl<'g, A: RouteAlgorithm> RouteFinder<'g, A> {
    pub fn with_algorithm(grid: &'g Grid, movement: Movement, algorithm: A) -> Self {
        Self {
            grid,
            movement,
            algorithm,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// first route found from `start` to `target`, `None` if there is none
    pub fn find_route(&self, start: Coordinate, target: Coordinate) -> Option<Path> {
        self.algorithm.find_route(self.grid, self.movement, start, target)
    }

    pub fn plan(&self, start: Coordinate, target: Coordinate) -> RouteResult {
        log::debug!(
            "{}x{} grid ({} moves, {}): {} -> {}",
            self.grid.height(),
            self.grid.width(),
            self.movement.name(),
            self.algorithm.name(),
            start,
            target
        );

        let planning_start = Instant::now();
        let path = self.find_route(start, target);
        let planning_time = planning_start.elapsed();

        match &path {
            Some(path) => log::info!("planned {} steps in {:?}", path.moves(), planning_time),
            None => log::info!("no route to {} ({:?})", target, planning_time),
        }

        RouteResult::new(path, planning_time)
    }

    /// one route per waypoint, each starting at `start`
    pub fn routes_from(&self, start: Coordinate, waypoints: &[Coordinate]) -> Vec<Option<Path>> {
        waypoints
            .iter()
            .map(|&waypoint| self.find_route(start, waypoint))
            .collect()
    }

    pub fn route_matrix(&self, waypoints: &[Coordinate]) -> RouteMatrix {
        log::debug!("routing {} waypoints pairwise", waypoints.len());
        RouteMatrix::build(waypoints, |from, to| self.find_route(from, to))
    }
}
