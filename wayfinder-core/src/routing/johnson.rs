//! Johnson's all-pairs algorithm for sparse graphs

use std::hash::Hash;

use hashbrown::HashMap;

use crate::graph::{EdgeListGraph, IncidenceGraph, VertexListGraph, endpoints};
use crate::routing::bellman_ford::relax_edges;
use crate::routing::dijkstra::Dijkstra;
use crate::routing::queue::{BinaryHeapFactory, QueueFactory};
use crate::routing::visitor::NoopVisitor;
use crate::{AllPairsShortestPaths, Cost, Weight};

/// All-pairs shortest paths through Bellman-Ford potentials and one
/// Dijkstra run per vertex.
///
/// Negative weights are fine. If the graph contains a negative cycle the
/// whole computation is abandoned and the returned result is empty with
/// [`AllPairsShortestPaths::has_negative_cycle`] set.
#[derive(Debug, Clone, Copy)]
pub struct Johnson<F, Q = BinaryHeapFactory> {
    weight: F,
    queue: Q,
}

impl<F> Johnson<F> {
    pub fn new(weight: F) -> Self {
        Johnson {
            weight,
            queue: BinaryHeapFactory,
        }
    }
}

impl<F, Q> Johnson<F, Q> {
    /// Queue strategy for the inner Dijkstra runs.
    pub fn with_queue<Q2: QueueFactory>(self, queue: Q2) -> Johnson<F, Q2> {
        Johnson {
            weight: self.weight,
            queue,
        }
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }
}

impl<F, Q: QueueFactory> Johnson<F, Q> {
    pub fn all_pairs<G, W>(&self, graph: &G) -> AllPairsShortestPaths<G::Vertex, G::Edge, W>
    where
        G: VertexListGraph + EdgeListGraph + IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        let vertices: Vec<G::Vertex> = graph.vertices().collect();
        log::debug!("Johnson: {} vertices", vertices.len());

        // Every vertex at zero stands in for a virtual source with
        // zero-weight edges to all of them
        let seeded = vertices.iter().map(|&v| (v, W::zero())).collect();
        let relaxation = relax_edges(graph, &self.weight, seeded, true, &mut NoopVisitor);
        if relaxation.negative_cycle {
            log::warn!("Johnson: negative cycle detected, abandoning all-pairs computation");
            return AllPairsShortestPaths::abandoned();
        }
        let potentials = relaxation.costs;

        let reweighted = |edge: G::Edge, g: &G| -> W {
            let weight = (self.weight)(edge, g);
            match endpoints(g, edge) {
                Some((from, to)) => {
                    (weight + potential(&potentials, from)) - potential(&potentials, to)
                }
                None => weight,
            }
        };
        let dijkstra = Dijkstra::new(reweighted).with_queue(&self.queue);

        let mut result = AllPairsShortestPaths::with_vertices(vertices);
        for i in 0..result.order() {
            let source = result.vertices()[i];
            let shift = potential(&potentials, source);
            let shortest = dijkstra.shortest_paths(graph, source);
            for (target, reduced) in shortest.reached() {
                let Some(j) = result.index_of(target) else {
                    continue;
                };
                let distance = (reduced + potential(&potentials, target)) - shift;
                result.set(i, j, Cost::Finite(distance), shortest.predecessor(target));
            }
        }

        log::debug!("Johnson: finished {} single-source runs", result.order());
        result
    }
}

fn potential<V: Copy + Eq + Hash, W: Weight>(potentials: &HashMap<V, W>, vertex: V) -> W {
    potentials.get(&vertex).copied().unwrap_or_else(W::zero)
}
