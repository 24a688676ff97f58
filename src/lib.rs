//! Shortest-path toolkit for directed, edge-weighted graphs
//!
//! Re-exports every engine of `wayfinder_core` and adds [`ShortestPaths`],
//! which picks a suitable engine from the shape of the graph.

pub mod select;

pub use select::{Algorithm, Routed, ShortestPaths};
pub use wayfinder_core::prelude::*;
pub use wayfinder_core::{cost, error, graph, model, routing};

pub use petgraph;
