use super::{cell::Cell, coordinate::Coordinate, obstacle::Obstacle};
use crate::error::{Result, RouteError};

/// Fixed-size passability matrix.
///
/// Every cell starts passable. [`Grid::stamp`] is the only mutation and it
/// only ever blocks cells, so stamping is idempotent and the dimensions never
/// change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(RouteError::InvalidDimensions { height, width });
        }

        Ok(Self {
            cells: vec![Cell::Passable; height * width],
            height,
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    pub fn cell(&self, pos: Coordinate) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    /// false for anything outside `[0, height) x [0, width)`
    pub fn is_passable(&self, row: isize, col: isize) -> bool {
        self.is_passable_at(Coordinate::new(row, col))
    }

    pub fn is_passable_at(&self, pos: Coordinate) -> bool {
        self.cell(pos).is_some_and(Cell::is_passable)
    }

    /// Blocks the rectangle `[row, row + h) x [col, col + w)`.
    ///
    /// The part of the rectangle that overflows the grid is dropped. An origin
    /// outside the grid makes the call a no-op.
    pub fn stamp(&mut self, row: isize, col: isize, obstacle: Obstacle) {
        let origin = Coordinate::new(row, col);
        if !self.contains(origin) {
            log::trace!("obstacle origin {} outside grid, ignored", origin);
            return;
        }

        let (row, col) = (row as usize, col as usize);
        let row_end = row.saturating_add(obstacle.height()).min(self.height);
        let col_end = col.saturating_add(obstacle.width()).min(self.width);

        for r in row..row_end {
            let start = r * self.width;
            self.cells[start + col..start + col_end].fill(Cell::Blocked);
        }

        log::trace!(
            "stamped {}x{} obstacle at {} (clipped to {}x{})",
            obstacle.height(),
            obstacle.width(),
            origin,
            row_end - row,
            col_end - col
        );
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// rows of 0 (passable) / 1 (impassable), the view renderers consume
    pub fn passability_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_passable()).count()
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_passable())
            .map(|(idx, _)| Coordinate::from_index(idx, self.width))
    }
}
