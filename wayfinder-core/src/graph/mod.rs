//! Graph access interface
//!
//! The engines never own or mutate a graph. They borrow it through these
//! narrow capability traits and each algorithm bounds on exactly the subset
//! it needs: Dijkstra only walks outgoing edges, the bidirectional search
//! also walks incoming ones, and the relaxation-based algorithms enumerate
//! the whole vertex and edge sets.

use std::fmt::Debug;
use std::hash::Hash;

pub mod filtered;
pub mod petgraph;

pub use filtered::FilteredGraph;
pub use self::petgraph::edge_weight;

/// Descriptor types and edge endpoint resolution.
pub trait GraphBase {
    /// Opaque vertex identifier.
    type Vertex: Copy + Eq + Hash + Debug;
    /// Opaque edge identifier.
    type Edge: Copy + Eq + Hash + Debug;

    /// Tail of `edge`, `None` if the edge is unknown to this graph.
    fn source(&self, edge: Self::Edge) -> Option<Self::Vertex>;

    /// Head of `edge`, `None` if the edge is unknown to this graph.
    fn destination(&self, edge: Self::Edge) -> Option<Self::Vertex>;
}

pub trait VertexListGraph: GraphBase {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

pub trait EdgeListGraph: GraphBase {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// Outgoing-edge access, enough for every forward search.
pub trait IncidenceGraph: GraphBase {
    fn outgoing_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;
}

/// Incoming-edge access on top of [`IncidenceGraph`], needed by searches
/// that run backward from a destination.
pub trait BidirectionalGraph: IncidenceGraph {
    fn incoming_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;
}

/// Both endpoints of an edge, `None` when either cannot be resolved.
pub(crate) fn endpoints<G: GraphBase>(graph: &G, edge: G::Edge) -> Option<(G::Vertex, G::Vertex)> {
    Some((graph.source(edge)?, graph.destination(edge)?))
}
