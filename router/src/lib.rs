//! Route construction on rectangular grids.
//!
//! A [`Grid`] is created once, stamped with rectangular [`Obstacle`]s and then
//! borrowed by a [`RouteFinder`], which expands competing routes one
//! generation at a time until one reaches the target. Every move costs one
//! step, so the returned [`Path`] has the fewest moves possible under the
//! chosen [`Movement`] mode.
//!
//! Two search strategies produce identical routes:
//!
//! - [`FrontierExpansion`]: every branch owns a copy of its route
//! - [`ArenaExpansion`]: branches are parent-linked arena nodes
//!
//! An unreachable target is a normal outcome and is reported as `None`.

pub mod algorithms;
pub mod error;
pub mod finder;
pub mod grid;
pub mod path;

pub use algorithms::routing::{ArenaExpansion, FrontierExpansion, RouteAlgorithm, RouteResult};
pub use error::{Result, RouteError};
pub use finder::{RouteFinder, RouteMatrix};
pub use grid::{Cell, Coordinate, Grid, Movement, Obstacle};
pub use path::Path;
