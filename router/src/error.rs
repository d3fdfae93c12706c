//! Error types for the route builder

use thiserror::Error;

use crate::grid::Coordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid grid dimensions: {height}x{width} (both must be positive)")]
    InvalidDimensions { height: usize, width: usize },

    #[error("invalid obstacle extent: {height}x{width} (both must be positive)")]
    InvalidObstacle { height: usize, width: usize },

    #[error("cannot append {to} after {from}: points are not adjacent")]
    NonAdjacentStep { from: Coordinate, to: Coordinate },
}

pub type Result<T> = std::result::Result<T, RouteError>;
