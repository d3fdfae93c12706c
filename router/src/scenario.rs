//! Scenario files describing a grid, its obstacles and the routes to build

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use router::{Coordinate, Grid, Movement, Obstacle};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub grid: GridConfig,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
    pub route: RouteConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
}

/// Rectangle stamped with its top-left corner at (row, col)
#[derive(Clone, Debug, Deserialize)]
pub struct ObstacleConfig {
    pub row: isize,
    pub col: isize,
    pub height: usize,
    pub width: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RouteConfig {
    pub start: [isize; 2],
    pub target: [isize; 2],

    /// Allow diagonal moves (default: false)
    #[serde(default)]
    pub diagonal: bool,

    /// Extra points for the `multi` command
    #[serde(default)]
    pub waypoints: Vec<[isize; 2]>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&contents).wrap_err_with(|| format!("invalid scenario {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// 40x200 field with seven blocks, routed from (6, 1) to (20, 150)
    pub fn demo() -> Self {
        let obstacles = [
            (3, 2, 5, 2),
            (5, 6, 5, 2),
            (8, 10, 5, 2),
            (12, 15, 5, 2),
            (1, 0, 2, 2),
            (9, 0, 2, 2),
            (5, 40, 30, 2),
        ]
        .into_iter()
        .map(|(row, col, height, width)| ObstacleConfig {
            row,
            col,
            height,
            width,
        })
        .collect();

        Self {
            grid: GridConfig {
                height: 40,
                width: 200,
            },
            obstacles,
            route: RouteConfig {
                start: [6, 1],
                target: [20, 150],
                diagonal: true,
                waypoints: vec![[20, 50], [10, 38], [2, 10]],
            },
        }
    }

    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.grid.height, self.grid.width)?;

        for (i, block) in self.obstacles.iter().enumerate() {
            let obstacle = Obstacle::new(block.height, block.width)
                .wrap_err_with(|| format!("obstacle #{}", i + 1))?;
            grid.stamp(block.row, block.col, obstacle);
        }

        log::debug!(
            "{}x{} grid, {} obstacles, {} cells blocked",
            grid.height(),
            grid.width(),
            self.obstacles.len(),
            grid.blocked_count()
        );

        Ok(grid)
    }

    pub fn start(&self) -> Coordinate {
        to_coordinate(self.route.start)
    }

    pub fn target(&self) -> Coordinate {
        to_coordinate(self.route.target)
    }

    pub fn waypoints(&self) -> Vec<Coordinate> {
        self.route.waypoints.iter().copied().map(to_coordinate).collect()
    }

    pub fn movement(&self, force_diagonal: bool) -> Movement {
        Movement::from_diagonal(self.route.diagonal || force_diagonal)
    }
}

fn to_coordinate([row, col]: [isize; 2]) -> Coordinate {
    Coordinate::new(row, col)
}
