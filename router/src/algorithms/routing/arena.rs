use crate::{
    grid::{Coordinate, Grid, Movement},
    path::Path,
};

use super::traits::{RouteAlgorithm, Shortcut, open_neighbors, shortcut};

#[derive(Debug, Clone, Copy)]
struct Node {
    point: Coordinate,
    parent: Option<usize>,
}

/// Same expansion and tie-breaking as
/// [`FrontierExpansion`](super::FrontierExpansion), but branches are arena
/// nodes pointing at their parent. Only the winning route is materialized,
/// so a generation costs one node per branch instead of a full route copy.
pub struct ArenaExpansion;

impl RouteAlgorithm for ArenaExpansion {
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

        let width = grid.width();
        let mut claimed = vec![false; grid.height() * width];
        claimed[start.to_index(width)] = true;

        let mut nodes = vec![Node {
            point: start,
            parent: None,
        }];
        let mut frontier = vec![0usize];
        let mut candidates = Vec::with_capacity(8);
        let mut generation = 0usize;

        while !frontier.is_empty() {
            generation += 1;
            let mut next = Vec::with_capacity(frontier.len() * 2);

            for &id in &frontier {
                // candidates are always in bounds once they pass the
                // passability filter
                open_neighbors(
                    grid,
                    movement,
                    nodes[id].point,
                    |c| claimed[c.to_index(width)],
                    &mut candidates,
                );

                if candidates.contains(&target) {
                    nodes.push(Node {
                        point: target,
                        parent: Some(id),
                    });
                    log::debug!(
                        "reached {} after {} generations ({} nodes)",
                        target,
                        generation,
                        nodes.len()
                    );
                    return Some(reconstruct_path(&nodes, nodes.len() - 1));
                }

                for &candidate in &candidates {
                    claimed[candidate.to_index(width)] = true;
                    nodes.push(Node {
                        point: candidate,
                        parent: Some(id),
                    });
                    next.push(nodes.len() - 1);
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
        "Arena"
    }
}

fn reconstruct_path(nodes: &[Node], last: usize) -> Path {
    let mut points = Vec::new();
    let mut current = Some(last);

    while let Some(id) = current {
        points.push(nodes[id].point);
        current = nodes[id].parent;
    }

    points.reverse();
    Path::from_points(points)
}
