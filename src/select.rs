//! Automatic algorithm selection

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use wayfinder_core::prelude::*;

/// Engine picked by [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Johnson,
}

/// A result together with the engine that produced it.
///
/// Dereferences to the wrapped value.
#[derive(Debug, Clone)]
pub struct Routed<T> {
    algorithm: Algorithm,
    has_negative_cycle: bool,
    value: T,
}

impl<T> Routed<T> {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Always `false` for Dijkstra; otherwise the engine's own flag.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Routed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Entry point that chooses a suitable engine for the given graph.
///
/// Single-source and point queries use Dijkstra when no edge weighs less
/// than zero and Bellman-Ford otherwise. All-pairs queries use
/// Floyd-Warshall on dense graphs (`E >= V^2 / 4`) and Johnson on sparse
/// ones. The weight scan only drives the choice; it does not validate
/// anything.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPaths<'g, G, F> {
    graph: &'g G,
    weight: F,
}

impl<'g, G, F> ShortestPaths<'g, G, F> {
    pub fn on(graph: &'g G, weight: F) -> Self {
        ShortestPaths { graph, weight }
    }
}

impl<G, F, W> ShortestPaths<'_, G, F>
where
    G: VertexListGraph + EdgeListGraph + IncidenceGraph,
    F: Fn(G::Edge, &G) -> W,
    W: Weight,
{
    pub fn has_negative_weights(&self) -> bool {
        let zero = W::zero();
        self.graph
            .edges()
            .any(|edge| (self.weight)(edge, self.graph) < zero)
    }

    pub fn single_source_algorithm(&self) -> Algorithm {
        if self.has_negative_weights() {
            Algorithm::BellmanFord
        } else {
            Algorithm::Dijkstra
        }
    }

    pub fn all_pairs_algorithm(&self) -> Algorithm {
        let vertices = self.graph.vertex_count();
        let edges = self.graph.edge_count();
        if edges.saturating_mul(4) >= vertices.saturating_mul(vertices) {
            Algorithm::FloydWarshall
        } else {
            Algorithm::Johnson
        }
    }

    /// Distances and predecessors from `source` to every reachable vertex.
    pub fn from(&self, source: G::Vertex) -> Routed<ShortestPathsFromSource<G::Vertex, G::Edge, W>> {
        let algorithm = self.single_source_algorithm();
        log::debug!("Single-source query from {source:?} using {algorithm:?}");
        match algorithm {
            Algorithm::BellmanFord => {
                let result = BellmanFord::new(&self.weight).shortest_paths(self.graph, source);
                Routed {
                    algorithm,
                    has_negative_cycle: result.has_negative_cycle(),
                    value: result.into_shortest_paths(),
                }
            }
            _ => Routed {
                algorithm,
                has_negative_cycle: false,
                value: Dijkstra::new(&self.weight).shortest_paths(self.graph, source),
            },
        }
    }

    /// Shortest path and distance between two vertices, `None` inside when
    /// unreachable or when a negative cycle spoils the answer.
    pub fn between(
        &self,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Routed<Option<(Path<G::Vertex, G::Edge>, W)>> {
        let algorithm = self.single_source_algorithm();
        log::debug!("Point query {source:?} to {destination:?} using {algorithm:?}");
        match algorithm {
            Algorithm::BellmanFord => {
                let result = BellmanFord::new(&self.weight).shortest_paths(self.graph, source);
                let value = if result.has_negative_cycle() {
                    None
                } else {
                    result
                        .distance(destination)
                        .zip(result.path_to(self.graph, destination))
                        .map(|(distance, path)| (path, distance))
                };
                Routed {
                    algorithm,
                    has_negative_cycle: result.has_negative_cycle(),
                    value,
                }
            }
            _ => Routed {
                algorithm,
                has_negative_cycle: false,
                value: Dijkstra::new(&self.weight).shortest_path_with_distance(
                    self.graph,
                    source,
                    destination,
                ),
            },
        }
    }

    pub fn all_pairs(&self) -> Routed<AllPairsShortestPaths<G::Vertex, G::Edge, W>> {
        let algorithm = self.all_pairs_algorithm();
        log::debug!("All-pairs query using {algorithm:?}");
        let value = match algorithm {
            Algorithm::FloydWarshall => FloydWarshall::new(&self.weight).all_pairs(self.graph),
            _ => Johnson::new(&self.weight).all_pairs(self.graph),
        };
        Routed {
            algorithm,
            has_negative_cycle: value.has_negative_cycle(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::Graph;

    use super::*;

    #[test]
    fn density_threshold() {
        let mut graph: Graph<(), u32> = Graph::new();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], 1);
        }
        // 3 edges on 4 vertices: 12 < 16
        assert_eq!(
            ShortestPaths::on(&graph, edge_weight).all_pairs_algorithm(),
            Algorithm::Johnson
        );

        graph.add_edge(nodes[3], nodes[0], 1);
        assert_eq!(
            ShortestPaths::on(&graph, edge_weight).all_pairs_algorithm(),
            Algorithm::FloydWarshall
        );
    }

    #[test]
    fn algorithm_names_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&Algorithm::BellmanFord).unwrap(),
            "\"bellman_ford\""
        );
    }
}
