use colored::Colorize;
use router::RouteMatrix;

const ROUTE: &str = "*";

/// Text overlay of a passability matrix: `0` passable, `1` blocked, `*` on
/// the route. Only the matrix and a membership predicate are needed.
pub fn overlay(matrix: &[Vec<u8>], on_route: impl Fn(isize, isize) -> bool) -> String {
    let mut out = String::new();

    for (row, cells) in matrix.iter().enumerate() {
        for (col, &bit) in cells.iter().enumerate() {
            let symbol = if on_route(row as isize, col as isize) {
                ROUTE.green().bold()
            } else if bit == 0 {
                "0".dimmed()
            } else {
                "1".red()
            };
            out.push_str(&symbol.to_string());
        }
        out.push('\n');
    }

    out
}

pub fn route_table(matrix: &RouteMatrix) -> String {
    let mut out = format!("{:>12}", "");
    for j in 0..matrix.size() {
        out.push_str(&format!("{:>8}", j + 1));
    }
    out.push('\n');

    for (i, row) in matrix.rows().enumerate() {
        out.push_str(&format!("{:>3} {:>8}", i + 1, matrix.waypoints()[i].to_string()));
        for length in row {
            let cell = length.map_or_else(|| "-".to_string(), |length| length.to_string());
            out.push_str(&format!("{cell:>8}"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use router::{Coordinate, Grid, Movement, Obstacle, RouteFinder};

    #[test]
    fn marks_route_over_cells() {
        colored::control::set_override(false);

        let matrix = vec![vec![0, 1, 0], vec![0, 0, 0]];
        let text = overlay(&matrix, |row, _| row == 1);
        assert_eq!(text, "010\n***\n");
    }

    #[test]
    fn table_has_a_row_per_waypoint() {
        colored::control::set_override(false);

        let mut grid = Grid::new(3, 3).unwrap();
        grid.stamp(1, 1, Obstacle::new(1, 1).unwrap());
        let finder = RouteFinder::new(&grid, Movement::Orthogonal);
        let matrix = finder.route_matrix(&[Coordinate::new(0, 0), Coordinate::new(2, 2)]);

        let table = route_table(&matrix);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("(2, 2)"));
        assert!(table.lines().nth(1).unwrap().ends_with("       5"));
    }

    #[test]
    fn table_marks_unreachable_pairs() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.stamp(0, 1, Obstacle::new(3, 1).unwrap());
        let finder = RouteFinder::new(&grid, Movement::Diagonal);
        let matrix = finder.route_matrix(&[Coordinate::new(0, 0), Coordinate::new(0, 2)]);

        let table = route_table(&matrix);
        assert_eq!(
            table.lines().nth(1).unwrap(),
            format!("{:>3} {:>8}{:>8}{:>8}", 1, "(0, 0)", 1, "-")
        );
    }
}
