//! Graph access for `petgraph` adjacency-list graphs

use petgraph::graph::{EdgeIndex, Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use super::{BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, VertexListGraph};
use crate::Weight;

impl<N, E, Ix: IndexType> GraphBase for Graph<N, E, Directed, Ix> {
    type Vertex = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;

    fn source(&self, edge: Self::Edge) -> Option<Self::Vertex> {
        self.edge_endpoints(edge).map(|(source, _)| source)
    }

    fn destination(&self, edge: Self::Edge) -> Option<Self::Vertex> {
        self.edge_endpoints(edge).map(|(_, destination)| destination)
    }
}

impl<N, E, Ix: IndexType> VertexListGraph for Graph<N, E, Directed, Ix> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.node_indices()
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}

impl<N, E, Ix: IndexType> EdgeListGraph for Graph<N, E, Directed, Ix> {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.edge_indices()
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}

impl<N, E, Ix: IndexType> IncidenceGraph for Graph<N, E, Directed, Ix> {
    fn outgoing_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.edges_directed(vertex, Direction::Outgoing)
            .map(|edge| edge.id())
    }
}

impl<N, E, Ix: IndexType> BidirectionalGraph for Graph<N, E, Directed, Ix> {
    fn incoming_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.edges_directed(vertex, Direction::Incoming)
            .map(|edge| edge.id())
    }
}

/// Weight extractor reading the petgraph edge payload.
///
/// Edges handed out by the graph itself always resolve; a foreign edge index
/// weighs zero.
pub fn edge_weight<N, W: Weight, Ix: IndexType>(
    edge: EdgeIndex<Ix>,
    graph: &Graph<N, W, Directed, Ix>,
) -> W {
    graph.edge_weight(edge).copied().unwrap_or_else(W::zero)
}
