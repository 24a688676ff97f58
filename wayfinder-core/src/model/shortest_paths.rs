//! Single-source results

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;

use super::reconstruct::reconstruct_path;
use crate::graph::GraphBase;
use crate::{Cost, Error, Path, Weight};

/// Distances and predecessor edges from one source vertex.
///
/// A vertex missing from the distance map is unreachable. The source maps
/// to zero and has no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathsFromSource<V, E, W> {
    source: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, E>,
}

impl<V, E, W> ShortestPathsFromSource<V, E, W>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
    W: Weight,
{
    pub(crate) fn from_parts(
        source: V,
        distances: HashMap<V, W>,
        predecessors: HashMap<V, E>,
    ) -> Self {
        ShortestPathsFromSource {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> V {
        self.source
    }

    /// Shortest known distance, `None` if unreachable.
    pub fn distance(&self, vertex: V) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    pub fn cost(&self, vertex: V) -> Cost<W> {
        self.distance(vertex).map_or(Cost::Infinite, Cost::Finite)
    }

    /// Last edge on the shortest path into `vertex`.
    pub fn predecessor(&self, vertex: V) -> Option<E> {
        self.predecessors.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: V) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// All reached vertices with their distances, in no particular order.
    pub fn reached(&self) -> impl Iterator<Item = (V, W)> + '_ {
        self.distances.iter().map(|(&vertex, &weight)| (vertex, weight))
    }

    /// Number of reached vertices, the source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Rebuilds the path to `destination`.
    ///
    /// # Errors
    ///
    /// Fails when the predecessor chain does not lead back to the source,
    /// which can only happen after a negative cycle.
    pub fn try_path_to<G>(
        &self,
        graph: &G,
        destination: V,
    ) -> Result<Option<Path<V, E>>, Error>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        if !self.is_reachable(destination) {
            return Ok(None);
        }
        reconstruct_path(graph, self.source, destination, self.len(), |v| {
            self.predecessor(v)
        })
    }

    /// Path to `destination`, `None` if unreachable or not reconstructible.
    pub fn path_to<G>(&self, graph: &G, destination: V) -> Option<Path<V, E>>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        self.try_path_to(graph, destination).ok().flatten()
    }
}

/// Bellman-Ford output: the single-source result plus the cycle flag.
///
/// When [`has_negative_cycle`](Self::has_negative_cycle) is set the
/// distances and any path derived from them must not be trusted.
#[derive(Debug, Clone)]
pub struct BellmanFordResult<V, E, W> {
    pub(crate) shortest_paths: ShortestPathsFromSource<V, E, W>,
    pub(crate) has_negative_cycle: bool,
}

impl<V, E, W> BellmanFordResult<V, E, W>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
    W: Weight,
{
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    pub fn shortest_paths(&self) -> &ShortestPathsFromSource<V, E, W> {
        &self.shortest_paths
    }

    pub fn into_shortest_paths(self) -> ShortestPathsFromSource<V, E, W> {
        self.shortest_paths
    }

    pub fn distance(&self, vertex: V) -> Option<W> {
        self.shortest_paths.distance(vertex)
    }

    pub fn path_to<G>(&self, graph: &G, destination: V) -> Option<Path<V, E>>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        self.shortest_paths.path_to(graph, destination)
    }
}
