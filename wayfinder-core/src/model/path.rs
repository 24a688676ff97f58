//! Materialized source-to-destination path

use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graph::GraphBase;
use crate::{Error, Weight};

/// An immutable walk through the graph.
///
/// Always holds `vertices.len() == edges.len() + 1`, starts at `source`,
/// ends at `destination`, and every `edges[i]` leads from `vertices[i]` to
/// `vertices[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path<V, E> {
    source: V,
    destination: V,
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Path<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// The zero-edge path that starts and ends at `vertex`.
    pub fn trivial(vertex: V) -> Self {
        Path {
            source: vertex,
            destination: vertex,
            vertices: vec![vertex],
            edges: Vec::new(),
        }
    }

    /// Builds a path by following `edges` from `source`.
    ///
    /// # Errors
    ///
    /// Fails if an edge cannot be resolved by `graph` or does not start where
    /// the previous edge ended.
    pub fn from_edges<G>(graph: &G, source: V, edges: Vec<E>) -> Result<Self, Error>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(source);
        let mut current = source;

        for (index, &edge) in edges.iter().enumerate() {
            let tail = graph.source(edge).ok_or_else(|| Error::dangling_edge(edge))?;
            if tail != current {
                return Err(Error::DisconnectedPath { index });
            }
            current = graph
                .destination(edge)
                .ok_or_else(|| Error::dangling_edge(edge))?;
            vertices.push(current);
        }

        Ok(Path {
            source,
            destination: current,
            vertices,
            edges,
        })
    }

    pub fn source(&self) -> V {
        self.source
    }

    pub fn destination(&self) -> V {
        self.destination
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Appends `other`, which must start where `self` ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JoinMismatch`] when the endpoints differ.
    pub fn concat(self, other: Path<V, E>) -> Result<Self, Error> {
        if self.destination != other.source {
            return Err(Error::JoinMismatch {
                left: format!("{:?}", self.destination),
                right: format!("{:?}", other.source),
            });
        }

        let mut vertices = self.vertices;
        vertices.extend(other.vertices.into_iter().skip(1));
        let mut edges = self.edges;
        edges.extend(other.edges);

        Ok(Path {
            source: self.source,
            destination: other.destination,
            vertices,
            edges,
        })
    }

    /// Leading sub-path ending at `vertices[index]`.
    pub(crate) fn prefix(&self, index: usize) -> Self {
        Path {
            source: self.source,
            destination: self.vertices[index],
            vertices: self.vertices[..=index].to_vec(),
            edges: self.edges[..index].to_vec(),
        }
    }

    /// Sum of the edge weights along the path.
    pub fn total_weight<G, W, F>(&self, graph: &G, weight: F) -> W
    where
        G: GraphBase<Vertex = V, Edge = E>,
        W: Weight,
        F: Fn(E, &G) -> W,
    {
        self.edges
            .iter()
            .fold(W::zero(), |total, &edge| total + weight(edge, graph))
    }

    /// Whether any vertex occurs more than once.
    pub fn has_repeated_vertex(&self) -> bool {
        !self.vertices.iter().all_unique()
    }
}
