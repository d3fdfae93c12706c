mod bounded;
mod cell;
mod coordinate;
mod movement;
mod obstacle;

pub use bounded::Grid;
pub use cell::Cell;
pub use coordinate::Coordinate;
pub use movement::Movement;
pub use obstacle::Obstacle;
