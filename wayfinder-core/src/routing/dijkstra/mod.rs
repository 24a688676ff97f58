//! Dijkstra's algorithm for graphs with non-negative edge weights
//!
//! Every entry point is built on [`DijkstraSteps`], the lazy variant that
//! emits one finalized vertex at a time.

mod steps;

pub use steps::{DijkstraStep, DijkstraSteps};

use crate::graph::IncidenceGraph;
use crate::routing::queue::{BinaryHeapFactory, QueueFactory};
use crate::routing::visitor::{NoopVisitor, Visitor};
use crate::{Cost, Path, ShortestPathsFromSource, Weight};

/// Steps type produced by a [`Dijkstra`] configured with factory `Q`.
pub type StepsOf<'a, G, F, W, Q, Vis> = DijkstraSteps<
    'a,
    G,
    F,
    W,
    <Q as QueueFactory>::Queue<<G as crate::graph::GraphBase>::Vertex, Cost<W>>,
    Vis,
>;

/// Single-source shortest paths over non-negative weights.
///
/// Negative weights are not rejected; they silently produce wrong
/// distances. The value holds only its weight extractor and queue factory
/// and can be reused for any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<F, Q = BinaryHeapFactory> {
    weight: F,
    queue: Q,
}

impl<F> Dijkstra<F> {
    pub fn new(weight: F) -> Self {
        Dijkstra {
            weight,
            queue: BinaryHeapFactory,
        }
    }
}

impl<F, Q> Dijkstra<F, Q> {
    /// Replaces the priority queue strategy.
    pub fn with_queue<Q2: QueueFactory>(self, queue: Q2) -> Dijkstra<F, Q2> {
        Dijkstra {
            weight: self.weight,
            queue,
        }
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }
}

impl<F, Q: QueueFactory> Dijkstra<F, Q> {
    /// Lazy run from `source`.
    pub fn steps<'a, G, W>(
        &'a self,
        graph: &'a G,
        source: G::Vertex,
    ) -> StepsOf<'a, G, F, W, Q, NoopVisitor>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.steps_with_visitor(graph, source, NoopVisitor)
    }

    pub fn steps_with_visitor<'a, G, W, Vis>(
        &'a self,
        graph: &'a G,
        source: G::Vertex,
        visitor: Vis,
    ) -> StepsOf<'a, G, F, W, Q, Vis>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
        Vis: Visitor<G::Vertex, G::Edge, W>,
    {
        DijkstraSteps::new(graph, &self.weight, source, self.queue.create(), visitor)
    }

    /// Distances and predecessors to every vertex reachable from `source`.
    pub fn shortest_paths<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
    ) -> ShortestPathsFromSource<G::Vertex, G::Edge, W>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.shortest_paths_with_visitor(graph, source, NoopVisitor)
    }

    pub fn shortest_paths_with_visitor<G, W, Vis>(
        &self,
        graph: &G,
        source: G::Vertex,
        visitor: Vis,
    ) -> ShortestPathsFromSource<G::Vertex, G::Edge, W>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
        Vis: Visitor<G::Vertex, G::Edge, W>,
    {
        log::debug!("Dijkstra: single-source search from {source:?}");
        let (distances, predecessors) = self
            .steps_with_visitor(graph, source, visitor)
            .finish();
        log::debug!("Dijkstra: reached {} vertices", distances.len());
        ShortestPathsFromSource::from_parts(source, distances, predecessors)
    }

    /// Shortest path from `source` to `destination`, stopping as soon as the
    /// destination is finalized.
    pub fn shortest_path<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge>>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.shortest_path_with_distance(graph, source, destination)
            .map(|(path, _)| path)
    }

    /// Like [`shortest_path`](Self::shortest_path) but also returns the
    /// path's total weight.
    pub fn shortest_path_with_distance<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<(Path<G::Vertex, G::Edge>, W)>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        let mut steps = self.steps(graph, source);
        let distance = steps.run_until(destination)?;
        let path = steps.path_to(destination)?;
        Some((path, distance))
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{Graph, NodeIndex};

    use super::*;
    use crate::graph::edge_weight;
    use crate::routing::queue::PriorityQueue;

    fn diamond() -> (Graph<&'static str, u32>, [NodeIndex; 5]) {
        let mut graph = Graph::new();
        let s = graph.add_node("s");
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        let d = graph.add_node("d");
        graph.add_edge(s, a, 3);
        graph.add_edge(s, b, 1);
        graph.add_edge(a, d, 1);
        graph.add_edge(b, c, 1);
        graph.add_edge(c, d, 1);
        (graph, [s, a, b, c, d])
    }

    #[test]
    fn prefers_cheaper_longer_route() {
        let (graph, [s, a, b, c, d]) = diamond();
        let dijkstra = Dijkstra::new(edge_weight);

        let (path, distance) = dijkstra.shortest_path_with_distance(&graph, s, d).unwrap();
        assert_eq!(path.vertices(), &[s, b, c, d]);
        assert_eq!(distance, 3);
        assert_eq!(path.total_weight(&graph, edge_weight), 3);

        let all = dijkstra.shortest_paths(&graph, s);
        assert_eq!(all.distance(a), Some(3));
        assert_eq!(all.distance(d), Some(3));
        assert_eq!(all.path_to(&graph, d), Some(path));
    }

    #[test]
    fn two_node_graph_is_one_way() {
        let mut graph: Graph<&str, u32> = Graph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, 2);
        let dijkstra = Dijkstra::new(edge_weight);

        let (path, distance) = dijkstra.shortest_path_with_distance(&graph, a, b).unwrap();
        assert_eq!(path.vertices(), &[a, b]);
        assert_eq!(distance, 2);
        assert_eq!(dijkstra.shortest_path(&graph, b, a), None);

        let from_b = dijkstra.shortest_paths(&graph, b);
        assert!(!from_b.is_reachable(a));
        assert_eq!(from_b.cost(a), Cost::Infinite);
        assert_eq!(from_b.path_to(&graph, a), None);
    }

    #[test]
    fn source_to_itself_is_trivial() {
        let (graph, [s, ..]) = diamond();
        let path = Dijkstra::new(edge_weight).shortest_path(&graph, s, s).unwrap();
        assert_eq!(path.vertices(), &[s]);
        assert!(path.is_empty());
    }

    #[test]
    fn steps_emit_non_decreasing_costs() {
        let (graph, [s, ..]) = diamond();
        let dijkstra = Dijkstra::new(edge_weight);
        let costs: Vec<u32> = dijkstra.steps(&graph, s).map(|step| step.cost).collect();

        assert_eq!(costs.len(), 5);
        assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn abandoned_steps_leave_results_usable() {
        let (graph, [s, _, b, ..]) = diamond();
        let dijkstra = Dijkstra::new(edge_weight);
        let mut steps = dijkstra.steps(&graph, s);

        let first = steps.next().unwrap();
        assert_eq!(first.vertex, s);
        assert_eq!(first.predecessor, None);
        let second = steps.next().unwrap();
        assert_eq!((second.vertex, second.cost), (b, 1));
        drop(steps);

        // Another run from the same configuration is unaffected
        assert_eq!(dijkstra.shortest_paths(&graph, s).len(), 5);
    }

    #[derive(Default)]
    struct Counter {
        finalized: usize,
        relaxed: usize,
        examined: usize,
    }

    impl<V, E, W> Visitor<V, E, W> for Counter {
        fn finalize_vertex(&mut self, _: V, _: W) {
            self.finalized += 1;
        }

        fn examine_edge(&mut self, _: E) {
            self.examined += 1;
        }

        fn edge_relaxed(&mut self, _: E, _: W) {
            self.relaxed += 1;
        }
    }

    #[test]
    fn visitor_observes_without_changing_results() {
        let (graph, [s, .., d]) = diamond();
        let dijkstra = Dijkstra::new(edge_weight);
        let mut counter = Counter::default();

        let observed = dijkstra.shortest_paths_with_visitor(&graph, s, &mut counter);
        let plain = dijkstra.shortest_paths(&graph, s);

        assert_eq!(counter.finalized, 5);
        assert_eq!(counter.examined, 5);
        // a->d comes too late to improve on s->b->c->d
        assert_eq!(counter.relaxed, 4);
        assert_eq!(observed.distance(d), plain.distance(d));
    }

    /// Unsorted vector scanned on every pop.
    struct LinearQueue<T, P>(Vec<(T, P)>);

    impl<T, P: PartialOrd> PriorityQueue<T, P> for LinearQueue<T, P> {
        fn push(&mut self, item: T, priority: P) {
            self.0.push((item, priority));
        }

        fn pop(&mut self) -> Option<(T, P)> {
            let (best, _) = self
                .0
                .iter()
                .enumerate()
                .reduce(|best, entry| if entry.1.1 < best.1.1 { entry } else { best })?;
            Some(self.0.remove(best))
        }

        fn peek_priority(&self) -> Option<&P> {
            self.0
                .iter()
                .map(|(_, priority)| priority)
                .reduce(|best, p| if p < best { p } else { best })
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    struct LinearFactory;

    impl QueueFactory for LinearFactory {
        type Queue<T, P: PartialOrd> = LinearQueue<T, P>;

        fn create<T, P: PartialOrd>(&self) -> Self::Queue<T, P> {
            LinearQueue(Vec::new())
        }
    }

    #[test]
    fn custom_queue_strategy_gives_same_answer() {
        let (graph, [s, .., d]) = diamond();
        let default = Dijkstra::new(edge_weight);
        let linear = Dijkstra::new(edge_weight).with_queue(LinearFactory);

        assert_eq!(
            linear.shortest_path_with_distance(&graph, s, d),
            default.shortest_path_with_distance(&graph, s, d)
        );
    }
}
