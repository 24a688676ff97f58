//! A* search towards a single goal vertex

use hashbrown::{HashMap, HashSet};

use crate::graph::IncidenceGraph;
use crate::model::reconstruct::reconstruct_path;
use crate::routing::queue::{BinaryHeapFactory, PriorityQueue, QueueFactory};
use crate::routing::visitor::{NoopVisitor, Visitor};
use crate::{Cost, Path, Weight};

/// Dijkstra with the queue ordered by `g(v) + h(v)`.
///
/// `h` estimates the remaining cost from a vertex to the goal of the call.
/// The result is optimal only if `h` never overestimates; this is not
/// checked, and an inadmissible heuristic yields a valid but possibly longer
/// path. Like [`Dijkstra`](crate::routing::dijkstra::Dijkstra) every vertex
/// is expanded at most once, so negative weights give wrong answers but the
/// search still terminates. With `h` returning zero everywhere it behaves
/// exactly like Dijkstra.
#[derive(Debug, Clone, Copy)]
pub struct AStar<F, H, Q = BinaryHeapFactory> {
    weight: F,
    heuristic: H,
    queue: Q,
}

impl<F, H> AStar<F, H> {
    pub fn new(weight: F, heuristic: H) -> Self {
        AStar {
            weight,
            heuristic,
            queue: BinaryHeapFactory,
        }
    }
}

impl<F, H, Q> AStar<F, H, Q> {
    pub fn with_queue<Q2: QueueFactory>(self, queue: Q2) -> AStar<F, H, Q2> {
        AStar {
            weight: self.weight,
            heuristic: self.heuristic,
            queue,
        }
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<F, H, Q: QueueFactory> AStar<F, H, Q> {
    pub fn shortest_path<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        goal: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge>>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        H: Fn(G::Vertex, &G) -> W,
        W: Weight,
    {
        self.shortest_path_with_visitor(graph, source, goal, NoopVisitor)
            .map(|(path, _)| path)
    }

    pub fn shortest_path_with_distance<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        goal: G::Vertex,
    ) -> Option<(Path<G::Vertex, G::Edge>, W)>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        H: Fn(G::Vertex, &G) -> W,
        W: Weight,
    {
        self.shortest_path_with_visitor(graph, source, goal, NoopVisitor)
    }

    /// Path and accumulated cost `g(goal)`, reporting events to `visitor`.
    pub fn shortest_path_with_visitor<G, W, Vis>(
        &self,
        graph: &G,
        source: G::Vertex,
        goal: G::Vertex,
        mut visitor: Vis,
    ) -> Option<(Path<G::Vertex, G::Edge>, W)>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        H: Fn(G::Vertex, &G) -> W,
        W: Weight,
        Vis: Visitor<G::Vertex, G::Edge, W>,
    {
        log::debug!("A*: searching from {source:?} to {goal:?}");

        // Entries carry the `g` they were pushed with so stale ones are
        // recognised on pop
        let mut queue = self.queue.create::<(G::Vertex, W), Cost<W>>();
        let mut costs: HashMap<G::Vertex, W> = HashMap::new();
        let mut closed: HashSet<G::Vertex> = HashSet::new();
        let mut predecessors: HashMap<G::Vertex, G::Edge> = HashMap::new();
        let mut expanded = 0usize;

        costs.insert(source, W::zero());
        visitor.discover_vertex(source, W::zero());
        queue.push(
            (source, W::zero()),
            Cost::Finite((self.heuristic)(source, graph)),
        );

        while let Some(((vertex, cost), _)) = queue.pop() {
            if costs.get(&vertex).is_some_and(|best| *best < cost) || !closed.insert(vertex) {
                continue;
            }
            visitor.finalize_vertex(vertex, cost);
            expanded += 1;

            if vertex == goal {
                log::debug!("A*: reached {goal:?} after expanding {expanded} vertices");
                let path = reconstruct_path(graph, source, goal, costs.len(), |v| {
                    predecessors.get(&v).copied()
                })
                .ok()
                .flatten()?;
                return Some((path, cost));
            }

            for edge in graph.outgoing_edges(vertex) {
                visitor.examine_edge(edge);
                let Some(next) = graph.destination(edge) else {
                    continue;
                };
                if closed.contains(&next) {
                    visitor.edge_not_relaxed(edge);
                    continue;
                }

                let candidate = Cost::Finite(cost) + (self.weight)(edge, graph);
                let current = costs.get(&next).map_or(Cost::Infinite, |&w| Cost::Finite(w));
                match candidate {
                    Cost::Finite(next_cost) if candidate.improves_on(&current) => {
                        if current.is_infinite() {
                            visitor.discover_vertex(next, next_cost);
                        }
                        costs.insert(next, next_cost);
                        predecessors.insert(next, edge);
                        queue.push((next, next_cost), candidate + (self.heuristic)(next, graph));
                        visitor.edge_relaxed(edge, next_cost);
                    }
                    _ => visitor.edge_not_relaxed(edge),
                }
            }
        }

        log::debug!("A*: {goal:?} unreachable, expanded {expanded} vertices");
        None
    }
}
