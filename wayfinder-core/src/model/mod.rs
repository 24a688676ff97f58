//! Result types handed back to callers
//!
//! Every result is built fresh by one algorithm call and never mutated
//! afterwards.

pub mod all_pairs;
pub mod path;
pub(crate) mod reconstruct;
pub mod shortest_paths;

pub use all_pairs::AllPairsShortestPaths;
pub use path::Path;
pub use shortest_paths::{BellmanFordResult, ShortestPathsFromSource};
