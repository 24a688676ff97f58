//! Floyd-Warshall all-pairs dynamic program

use crate::graph::{EdgeListGraph, VertexListGraph, endpoints};
use crate::{AllPairsShortestPaths, Cost, Weight};

/// Dense `O(V^3)` all-pairs shortest paths.
///
/// Negative weights are fine. After the main loop every diagonal entry is
/// checked; a negative one means the vertex sits on a negative cycle and is
/// reported through [`AllPairsShortestPaths::has_negative_cycle`].
#[derive(Debug, Clone, Copy)]
pub struct FloydWarshall<F> {
    weight: F,
}

impl<F> FloydWarshall<F> {
    pub fn new(weight: F) -> Self {
        FloydWarshall { weight }
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }

    pub fn all_pairs<G, W>(&self, graph: &G) -> AllPairsShortestPaths<G::Vertex, G::Edge, W>
    where
        G: VertexListGraph + EdgeListGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        let mut result = AllPairsShortestPaths::with_vertices(graph.vertices().collect());
        let n = result.order();
        log::debug!("Floyd-Warshall: {n} vertices");

        // Direct edges; parallel edges keep the lightest, a self-loop only
        // counts when it beats the zero diagonal
        for edge in graph.edges() {
            let Some((from, to)) = endpoints(graph, edge) else {
                continue;
            };
            let (Some(i), Some(j)) = (result.index_of(from), result.index_of(to)) else {
                continue;
            };
            let cost = Cost::Finite((self.weight)(edge, graph));
            if cost.improves_on(&result.cost_at(i, j)) {
                result.set(i, j, cost, Some(edge));
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through = result.cost_at(i, k);
                if through.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through + result.cost_at(k, j);
                    if candidate.improves_on(&result.cost_at(i, j)) {
                        let predecessor = result.predecessor_at(k, j);
                        result.set(i, j, candidate, predecessor);
                    }
                }
            }
        }

        result.mark_negative_diagonal();
        if result.has_negative_cycle() {
            log::warn!("Floyd-Warshall: negative cycle detected, distances are unreliable");
        }
        result
    }
}
