mod arena;
mod frontier;
pub mod traits;

pub use arena::ArenaExpansion;
pub use frontier::FrontierExpansion;
pub use traits::{RouteAlgorithm, RouteResult};
