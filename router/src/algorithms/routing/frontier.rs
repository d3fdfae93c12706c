use std::collections::HashSet;

use crate::{
    grid::{Coordinate, Grid, Movement},
    path::Path,
};

use super::traits::{RouteAlgorithm, Shortcut, open_neighbors, shortcut};

/// Generation-by-generation expansion where every branch owns a full copy of
/// its route.
///
/// Each generation extends every route of the frontier by one move. A cell is
/// claimed in the shared visited set as soon as some route discovers it, so
/// when two routes of the same generation could both step onto a cell, the
/// one that comes first in frontier order wins it. The frontier keeps
/// insertion order, which makes the returned route reproducible.
pub struct FrontierExpansion;

impl RouteAlgorithm for FrontierExpansion {
    fn find_route(
        &self,
        grid: &Grid,
        movement: Movement,
        start: Coordinate,
        target: Coordinate,
    ) -> Option<Path> {
        if let Shortcut::Resolved(outcome) = shortcut(grid, start, target) {
            return outcome;
        }

        let mut frontier = vec![Path::new(start)];
        let mut visited = HashSet::from([start]);
        let mut candidates = Vec::with_capacity(8);
        let mut generation = 0usize;

        while !frontier.is_empty() {
            generation += 1;
            let mut next = Vec::with_capacity(frontier.len() * 2);

            // consuming the frontier drops every losing branch right here
            for mut path in frontier {
                open_neighbors(
                    grid,
                    movement,
                    path.last_point(),
                    |c| visited.contains(&c),
                    &mut candidates,
                );

                if candidates.contains(&target) {
                    path.push(target);
                    log::debug!(
                        "reached {} after {} generations ({} cells claimed)",
                        target,
                        generation,
                        visited.len()
                    );
                    return Some(path);
                }

                for &candidate in &candidates {
                    visited.insert(candidate);
                    let mut branch = path.duplicate();
                    branch.push(candidate);
                    next.push(branch);
                }
            }

            log::trace!("generation {}: {} branches", generation, next.len());
            frontier = next;
        }

        log::debug!(
            "frontier exhausted after {} generations, {} unreachable",
            generation,
            target
        );
        None
    }

    fn name(&self) -> &'static str {
        "Frontier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Obstacle;

    fn open_grid(size: usize) -> Grid {
        Grid::new(size, size).unwrap()
    }

    #[test]
    fn straight_line_on_open_grid() {
        let grid = open_grid(5);
        let path = FrontierExpansion
            .find_route(
                &grid,
                Movement::Orthogonal,
                Coordinate::new(0, 0),
                Coordinate::new(0, 4),
            )
            .unwrap();

        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|p| p.row == 0));
    }

    #[test]
    fn first_enumerated_neighbor_wins_ties() {
        // down is enumerated before right, so the route drops first
        let grid = open_grid(3);
        let path = FrontierExpansion
            .find_route(
                &grid,
                Movement::Orthogonal,
                Coordinate::new(0, 0),
                Coordinate::new(1, 1),
            )
            .unwrap();

        assert_eq!(
            path.points(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn blocked_target_is_not_found() {
        let mut grid = open_grid(4);
        grid.stamp(3, 3, Obstacle::new(1, 1).unwrap());
        let outcome = FrontierExpansion.find_route(
            &grid,
            Movement::Diagonal,
            Coordinate::new(0, 0),
            Coordinate::new(3, 3),
        );
        assert!(outcome.is_none());
    }

    #[test]
    fn start_inside_an_obstacle_still_expands() {
        let mut grid = open_grid(3);
        grid.stamp(0, 0, Obstacle::new(1, 1).unwrap());
        let path = FrontierExpansion
            .find_route(
                &grid,
                Movement::Orthogonal,
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
            )
            .unwrap();
        assert_eq!(path.len(), 3);
    }
}
