use hashbrown::{HashMap, HashSet};

use crate::graph::IncidenceGraph;
use crate::model::reconstruct::reconstruct_path;
use crate::routing::queue::PriorityQueue;
use crate::routing::visitor::Visitor;
use crate::{Cost, Path, Weight};

/// One finalized vertex emitted by [`DijkstraSteps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraStep<V, E, W> {
    pub vertex: V,
    /// Final shortest distance from the source.
    pub cost: W,
    /// Last edge on the shortest path, `None` for the source.
    pub predecessor: Option<E>,
}

/// Lazy Dijkstra run yielding vertices in non-decreasing cost order.
///
/// All working state lives inside the iterator, so a consumer may stop at
/// any point and simply drop it.
pub struct DijkstraSteps<'a, G: IncidenceGraph, F, W, Q, Vis> {
    graph: &'a G,
    weight: &'a F,
    source: G::Vertex,
    queue: Q,
    costs: HashMap<G::Vertex, W>,
    predecessors: HashMap<G::Vertex, G::Edge>,
    finalized: HashSet<G::Vertex>,
    visitor: Vis,
}

impl<'a, G, F, W, Q, Vis> DijkstraSteps<'a, G, F, W, Q, Vis>
where
    G: IncidenceGraph,
    F: Fn(G::Edge, &G) -> W,
    W: Weight,
    Q: PriorityQueue<G::Vertex, Cost<W>>,
    Vis: Visitor<G::Vertex, G::Edge, W>,
{
    pub(crate) fn new(
        graph: &'a G,
        weight: &'a F,
        source: G::Vertex,
        mut queue: Q,
        mut visitor: Vis,
    ) -> Self {
        let mut costs = HashMap::new();
        costs.insert(source, W::zero());
        visitor.discover_vertex(source, W::zero());
        queue.push(source, Cost::zero());

        DijkstraSteps {
            graph,
            weight,
            source,
            queue,
            costs,
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            visitor,
        }
    }

    pub fn source(&self) -> G::Vertex {
        self.source
    }

    /// Tentative cost, final once the vertex has been emitted.
    pub fn cost(&self, vertex: G::Vertex) -> Cost<W> {
        self.costs
            .get(&vertex)
            .map_or(Cost::Infinite, |&w| Cost::Finite(w))
    }

    pub fn is_finalized(&self, vertex: G::Vertex) -> bool {
        self.finalized.contains(&vertex)
    }

    /// Smallest tentative cost still waiting in the queue.
    pub fn frontier(&self) -> Cost<W> {
        self.queue.peek_priority().copied().unwrap_or(Cost::Infinite)
    }

    /// Advances until `target` is finalized and returns its distance, or
    /// `None` once the queue runs dry without reaching it.
    pub fn run_until(&mut self, target: G::Vertex) -> Option<W> {
        if self.is_finalized(target) {
            return self.costs.get(&target).copied();
        }
        self.by_ref()
            .find(|step| step.vertex == target)
            .map(|step| step.cost)
    }

    /// Path to an already finalized `target`.
    pub fn path_to(&self, target: G::Vertex) -> Option<Path<G::Vertex, G::Edge>> {
        if !self.is_finalized(target) {
            return None;
        }
        reconstruct_path(
            self.graph,
            self.source,
            target,
            self.finalized.len(),
            |v| self.predecessors.get(&v).copied(),
        )
        .ok()
        .flatten()
    }

    /// Drains the remaining queue and returns the finished maps.
    pub(crate) fn finish(mut self) -> (HashMap<G::Vertex, W>, HashMap<G::Vertex, G::Edge>) {
        self.by_ref().for_each(drop);
        (self.costs, self.predecessors)
    }

    fn relax_outgoing(&mut self, vertex: G::Vertex, cost: W) {
        let graph = self.graph;
        for edge in graph.outgoing_edges(vertex) {
            self.visitor.examine_edge(edge);
            let Some(next) = graph.destination(edge) else {
                continue;
            };
            if self.finalized.contains(&next) {
                self.visitor.edge_not_relaxed(edge);
                continue;
            }

            let candidate = Cost::Finite(cost) + (self.weight)(edge, graph);
            let current = self.cost(next);
            match candidate {
                Cost::Finite(next_cost) if candidate.improves_on(&current) => {
                    if current.is_infinite() {
                        self.visitor.discover_vertex(next, next_cost);
                    }
                    self.costs.insert(next, next_cost);
                    self.predecessors.insert(next, edge);
                    self.queue.push(next, candidate);
                    self.visitor.edge_relaxed(edge, next_cost);
                }
                _ => self.visitor.edge_not_relaxed(edge),
            }
        }
    }
}

impl<G, F, W, Q, Vis> Iterator for DijkstraSteps<'_, G, F, W, Q, Vis>
where
    G: IncidenceGraph,
    F: Fn(G::Edge, &G) -> W,
    W: Weight,
    Q: PriorityQueue<G::Vertex, Cost<W>>,
    Vis: Visitor<G::Vertex, G::Edge, W>,
{
    type Item = DijkstraStep<G::Vertex, G::Edge, W>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((vertex, priority)) = self.queue.pop() {
            // Stale entry: a cheaper copy was already popped
            if !self.finalized.insert(vertex) {
                continue;
            }
            let Cost::Finite(cost) = priority else {
                continue;
            };

            self.visitor.finalize_vertex(vertex, cost);
            self.relax_outgoing(vertex, cost);

            return Some(DijkstraStep {
                vertex,
                cost,
                predecessor: self.predecessors.get(&vertex).copied(),
            });
        }
        None
    }
}
