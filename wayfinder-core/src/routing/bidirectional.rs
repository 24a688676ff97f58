//! Bidirectional Dijkstra for point-to-point queries
//!
//! A forward search from the source over outgoing edges and a backward
//! search from the destination over incoming edges share one priority
//! queue, so the cheaper frontier always advances next. The result is
//! stitched together at the best meeting vertex.

use std::hash::Hash;

use hashbrown::{HashMap, HashSet};
use itertools::Either;
use serde::{Deserialize, Serialize};

use crate::graph::BidirectionalGraph;
use crate::model::reconstruct::reconstruct_path;
use crate::routing::queue::{BinaryHeapFactory, PriorityQueue, QueueFactory};
use crate::{Cost, Error, Path, Weight};

/// When the interleaved searches stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Keep going until the two search radii together reach the best
    /// combined distance seen so far. Always optimal.
    #[default]
    Optimal,
    /// Stop at the first vertex finalized by both searches and stitch the
    /// path there. Cheaper, but the returned path can be longer than the
    /// shortest one when the best route meets inside neither radius.
    FirstMeeting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// State of one of the two searches.
struct Search<V, E, W> {
    costs: HashMap<V, W>,
    predecessors: HashMap<V, E>,
    finalized: HashSet<V>,
    /// Cost of the last vertex this search finalized.
    radius: W,
}

impl<V: Copy + Eq + Hash, E, W: Weight> Search<V, E, W> {
    fn rooted_at(root: V) -> Self {
        let mut costs = HashMap::new();
        costs.insert(root, W::zero());
        Search {
            costs,
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            radius: W::zero(),
        }
    }

    fn cost(&self, vertex: V) -> Cost<W> {
        self.costs
            .get(&vertex)
            .map_or(Cost::Infinite, |&w| Cost::Finite(w))
    }
}

/// Point-to-point Dijkstra searching from both ends at once.
///
/// Needs incoming-edge access, see [`BidirectionalGraph`]. Weights must be
/// non-negative; this is not checked.
#[derive(Debug, Clone, Copy)]
pub struct BidirectionalDijkstra<F, Q = BinaryHeapFactory> {
    weight: F,
    queue: Q,
    termination: Termination,
}

impl<F> BidirectionalDijkstra<F> {
    pub fn new(weight: F) -> Self {
        BidirectionalDijkstra {
            weight,
            queue: BinaryHeapFactory,
            termination: Termination::default(),
        }
    }
}

impl<F, Q> BidirectionalDijkstra<F, Q> {
    pub fn with_queue<Q2: QueueFactory>(self, queue: Q2) -> BidirectionalDijkstra<F, Q2> {
        BidirectionalDijkstra {
            weight: self.weight,
            queue,
            termination: self.termination,
        }
    }

    #[must_use]
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }
}

impl<F, Q: QueueFactory> BidirectionalDijkstra<F, Q> {
    pub fn shortest_path<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge>>
    where
        G: BidirectionalGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.shortest_path_with_distance(graph, source, destination)
            .map(|(path, _)| path)
    }

    pub fn shortest_path_with_distance<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<(Path<G::Vertex, G::Edge>, W)>
    where
        G: BidirectionalGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        if source == destination {
            return Some((Path::trivial(source), W::zero()));
        }
        log::debug!(
            "Bidirectional Dijkstra: {source:?} to {destination:?} ({:?})",
            self.termination
        );

        let mut forward = Search::rooted_at(source);
        let mut backward = Search::rooted_at(destination);
        let mut queue = self.queue.create::<(Direction, G::Vertex), Cost<W>>();
        queue.push((Direction::Forward, source), Cost::zero());
        queue.push((Direction::Backward, destination), Cost::zero());

        // Best combined distance and the vertex it was found at
        let mut best: Option<(W, G::Vertex)> = None;

        while let Some(((direction, vertex), priority)) = queue.pop() {
            let Cost::Finite(cost) = priority else {
                continue;
            };
            let (this, other) = match direction {
                Direction::Forward => (&mut forward, &backward),
                Direction::Backward => (&mut backward, &forward),
            };
            if !this.finalized.insert(vertex) {
                continue;
            }
            this.radius = cost;

            match self.termination {
                Termination::FirstMeeting => {
                    if other.finalized.contains(&vertex) {
                        if let Some(&other_cost) = other.costs.get(&vertex) {
                            best = Some((cost + other_cost, vertex));
                            break;
                        }
                    }
                }
                Termination::Optimal => {
                    if let Some((mu, _)) = best {
                        let radii = Cost::Finite(this.radius) + other.radius;
                        if !radii.improves_on(&Cost::Finite(mu)) {
                            break;
                        }
                    }
                }
            }

            let edges = match direction {
                Direction::Forward => Either::Left(graph.outgoing_edges(vertex)),
                Direction::Backward => Either::Right(graph.incoming_edges(vertex)),
            };
            for edge in edges {
                let next = match direction {
                    Direction::Forward => graph.destination(edge),
                    Direction::Backward => graph.source(edge),
                };
                let Some(next) = next else {
                    continue;
                };
                if this.finalized.contains(&next) {
                    continue;
                }

                let candidate = Cost::Finite(cost) + (self.weight)(edge, graph);
                let Cost::Finite(next_cost) = candidate else {
                    continue;
                };
                if !candidate.improves_on(&this.cost(next)) {
                    continue;
                }
                this.costs.insert(next, next_cost);
                this.predecessors.insert(next, edge);
                queue.push((direction, next), candidate);

                if self.termination == Termination::Optimal {
                    let combined = candidate + other.cost(next);
                    let current = best.map_or(Cost::Infinite, |(mu, _)| Cost::Finite(mu));
                    if let Cost::Finite(total) = combined {
                        if combined.improves_on(&current) {
                            best = Some((total, next));
                        }
                    }
                }
            }
        }

        let Some((distance, meeting)) = best else {
            log::debug!("Bidirectional Dijkstra: {destination:?} unreachable from {source:?}");
            return None;
        };
        log::debug!(
            "Bidirectional Dijkstra: met at {meeting:?} after finalizing {} + {} vertices",
            forward.finalized.len(),
            backward.finalized.len()
        );

        match stitch(graph, source, destination, meeting, &forward, &backward) {
            Ok(path) => Some((path, distance)),
            Err(error) => {
                log::debug!("Bidirectional Dijkstra: cannot stitch path: {error}");
                None
            }
        }
    }
}

/// Forward chain `source -> meeting` joined with backward chain
/// `meeting -> destination`.
fn stitch<G: BidirectionalGraph, W: Weight>(
    graph: &G,
    source: G::Vertex,
    destination: G::Vertex,
    meeting: G::Vertex,
    forward: &Search<G::Vertex, G::Edge, W>,
    backward: &Search<G::Vertex, G::Edge, W>,
) -> Result<Path<G::Vertex, G::Edge>, Error> {
    let head = reconstruct_path(graph, source, meeting, forward.costs.len(), |v| {
        forward.predecessors.get(&v).copied()
    })?
    .ok_or(Error::BrokenPredecessorChain { steps: 0 })?;

    // Backward predecessors point away from the meeting vertex
    let mut edges = Vec::new();
    let mut current = meeting;
    while current != destination {
        if edges.len() >= backward.costs.len() {
            return Err(Error::BrokenPredecessorChain { steps: edges.len() });
        }
        let edge = backward
            .predecessors
            .get(&current)
            .copied()
            .ok_or(Error::BrokenPredecessorChain { steps: edges.len() })?;
        current = graph
            .destination(edge)
            .ok_or_else(|| Error::dangling_edge(edge))?;
        edges.push(edge);
    }
    let tail = Path::from_edges(graph, meeting, edges)?;

    head.concat(tail)
}
