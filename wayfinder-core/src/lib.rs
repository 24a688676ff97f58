//! Shortest paths over borrowed, directed, edge-weighted graphs
//!
//! The crate never stores a graph. Callers implement the narrow traits in
//! [`graph`] (or use the bundled `petgraph` adapter) and pass a weight
//! extractor `Fn(edge, &graph) -> W` to one of the engines in [`routing`].

pub mod cost;
pub mod error;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod routing;

pub use cost::{Cost, Weight};
pub use error::Error;
pub use model::{AllPairsShortestPaths, BellmanFordResult, Path, ShortestPathsFromSource};
