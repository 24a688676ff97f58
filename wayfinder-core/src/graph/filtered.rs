//! Read-only graph view with hidden vertices and edges

use hashbrown::HashSet;

use super::{BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, VertexListGraph};

/// A view over `G` that behaves as if some vertices and edges were removed.
///
/// The underlying graph is never touched. A hidden vertex takes all of its
/// incident edges with it.
#[derive(Debug, Clone)]
pub struct FilteredGraph<'g, G: GraphBase> {
    graph: &'g G,
    hidden_vertices: HashSet<G::Vertex>,
    hidden_edges: HashSet<G::Edge>,
}

impl<'g, G: GraphBase> FilteredGraph<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        FilteredGraph {
            graph,
            hidden_vertices: HashSet::new(),
            hidden_edges: HashSet::new(),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn hide_vertex(&mut self, vertex: G::Vertex) {
        self.hidden_vertices.insert(vertex);
    }

    pub fn hide_edge(&mut self, edge: G::Edge) {
        self.hidden_edges.insert(edge);
    }

    #[must_use]
    pub fn without_vertices(mut self, vertices: impl IntoIterator<Item = G::Vertex>) -> Self {
        self.hidden_vertices.extend(vertices);
        self
    }

    #[must_use]
    pub fn without_edges(mut self, edges: impl IntoIterator<Item = G::Edge>) -> Self {
        self.hidden_edges.extend(edges);
        self
    }

    pub fn is_vertex_visible(&self, vertex: G::Vertex) -> bool {
        !self.hidden_vertices.contains(&vertex)
    }

    /// An edge is visible when it is not hidden and neither endpoint is.
    pub fn is_edge_visible(&self, edge: G::Edge) -> bool {
        if self.hidden_edges.contains(&edge) {
            return false;
        }
        let source_visible = self
            .graph
            .source(edge)
            .is_some_and(|v| self.is_vertex_visible(v));
        let destination_visible = self
            .graph
            .destination(edge)
            .is_some_and(|v| self.is_vertex_visible(v));
        source_visible && destination_visible
    }
}

impl<G: GraphBase> GraphBase for FilteredGraph<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn source(&self, edge: Self::Edge) -> Option<Self::Vertex> {
        self.graph.source(edge)
    }

    fn destination(&self, edge: Self::Edge) -> Option<Self::Vertex> {
        self.graph.destination(edge)
    }
}

impl<G: VertexListGraph> VertexListGraph for FilteredGraph<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph
            .vertices()
            .filter(|&vertex| self.is_vertex_visible(vertex))
    }
}

impl<G: EdgeListGraph> EdgeListGraph for FilteredGraph<'_, G> {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph
            .edges()
            .filter(|&edge| self.is_edge_visible(edge))
    }
}

impl<G: IncidenceGraph> IncidenceGraph for FilteredGraph<'_, G> {
    fn outgoing_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        let visible = self.is_vertex_visible(vertex);
        self.graph
            .outgoing_edges(vertex)
            .filter(move |&edge| visible && self.is_edge_visible(edge))
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for FilteredGraph<'_, G> {
    fn incoming_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        let visible = self.is_vertex_visible(vertex);
        self.graph
            .incoming_edges(vertex)
            .filter(move |&edge| visible && self.is_edge_visible(edge))
    }
}
