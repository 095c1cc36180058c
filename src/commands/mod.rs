//! Command implementations

pub mod distance;
pub mod ladder;
pub mod neighbors;
pub mod simple;

pub use distance::{DistanceResult, check_distance};
pub use ladder::{Algorithm, LadderConfig, LadderResult, run_ladder};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use simple::run_simple;
