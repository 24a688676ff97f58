//! Bellman-Ford for graphs that may contain negative weights

use hashbrown::HashMap;

use crate::graph::{EdgeListGraph, VertexListGraph, endpoints};
use crate::model::BellmanFordResult;
use crate::routing::visitor::{NoopVisitor, Visitor};
use crate::{Cost, Path, ShortestPathsFromSource, Weight};

/// Outcome of the shared relaxation loop.
pub(crate) struct Relaxation<V, E, W> {
    pub(crate) costs: HashMap<V, W>,
    pub(crate) predecessors: HashMap<V, E>,
    pub(crate) negative_cycle: bool,
}

/// Relaxes every edge `|V| - 1` times starting from `costs`, then runs one
/// more pass to detect a negative cycle.
///
/// Vertices missing from `costs` start at infinity. Johnson seeds every
/// vertex with zero to emulate a virtual source.
pub(crate) fn relax_edges<G, F, W, Vis>(
    graph: &G,
    weight: &F,
    mut costs: HashMap<G::Vertex, W>,
    early_exit: bool,
    visitor: &mut Vis,
) -> Relaxation<G::Vertex, G::Edge, W>
where
    G: VertexListGraph + EdgeListGraph,
    F: Fn(G::Edge, &G) -> W,
    W: Weight,
    Vis: Visitor<G::Vertex, G::Edge, W>,
{
    let mut predecessors = HashMap::new();
    let passes = graph.vertex_count().saturating_sub(1);
    let mut converged = false;

    for pass in 0..passes {
        let mut changed = 0usize;
        for edge in graph.edges() {
            visitor.examine_edge(edge);
            let Some((from, to)) = endpoints(graph, edge) else {
                continue;
            };
            let Some(&from_cost) = costs.get(&from) else {
                visitor.edge_not_relaxed(edge);
                continue;
            };

            let candidate = Cost::Finite(from_cost) + weight(edge, graph);
            let current = costs.get(&to).map_or(Cost::Infinite, |&w| Cost::Finite(w));
            match candidate {
                Cost::Finite(to_cost) if candidate.improves_on(&current) => {
                    log::trace!("Bellman-Ford: pass {pass} relaxed {edge:?} to {to_cost:?}");
                    if current.is_infinite() {
                        visitor.discover_vertex(to, to_cost);
                    }
                    costs.insert(to, to_cost);
                    predecessors.insert(to, edge);
                    visitor.edge_relaxed(edge, to_cost);
                    changed += 1;
                }
                _ => visitor.edge_not_relaxed(edge),
            }
        }

        if changed == 0 {
            converged = true;
            if early_exit {
                log::debug!("Bellman-Ford: converged after {} passes", pass + 1);
                break;
            }
        }
    }

    // A pass without any relaxation is a fixpoint, so the check pass
    // cannot find anything either
    let mut negative_cycle = false;
    if !converged {
        for edge in graph.edges() {
            let Some((from, to)) = endpoints(graph, edge) else {
                continue;
            };
            let Some(&from_cost) = costs.get(&from) else {
                continue;
            };
            let candidate = Cost::Finite(from_cost) + weight(edge, graph);
            let current = costs.get(&to).map_or(Cost::Infinite, |&w| Cost::Finite(w));
            if candidate.improves_on(&current) {
                negative_cycle = true;
                visitor.negative_cycle_detected(edge);
            }
        }
    }
    if negative_cycle {
        log::warn!("Bellman-Ford: negative cycle detected, distances are unreliable");
    }

    Relaxation {
        costs,
        predecessors,
        negative_cycle,
    }
}

/// Single-source shortest paths tolerating negative edge weights.
///
/// A negative cycle reachable from the source is reported through
/// [`BellmanFordResult::has_negative_cycle`] rather than as an error.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord<F> {
    weight: F,
    early_exit: bool,
}

impl<F> BellmanFord<F> {
    pub fn new(weight: F) -> Self {
        BellmanFord {
            weight,
            early_exit: true,
        }
    }

    /// Stop as soon as a pass relaxes nothing. Enabled by default.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }

    pub fn shortest_paths<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
    ) -> BellmanFordResult<G::Vertex, G::Edge, W>
    where
        G: VertexListGraph + EdgeListGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.shortest_paths_with_visitor(graph, source, NoopVisitor)
    }

    pub fn shortest_paths_with_visitor<G, W, Vis>(
        &self,
        graph: &G,
        source: G::Vertex,
        mut visitor: Vis,
    ) -> BellmanFordResult<G::Vertex, G::Edge, W>
    where
        G: VertexListGraph + EdgeListGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
        Vis: Visitor<G::Vertex, G::Edge, W>,
    {
        log::debug!(
            "Bellman-Ford: single-source search from {source:?} over {} vertices",
            graph.vertex_count()
        );
        let mut costs = HashMap::new();
        costs.insert(source, W::zero());
        visitor.discover_vertex(source, W::zero());

        let relaxation = relax_edges(graph, &self.weight, costs, self.early_exit, &mut visitor);
        log::debug!("Bellman-Ford: reached {} vertices", relaxation.costs.len());

        BellmanFordResult {
            shortest_paths: ShortestPathsFromSource::from_parts(
                source,
                relaxation.costs,
                relaxation.predecessors,
            ),
            has_negative_cycle: relaxation.negative_cycle,
        }
    }

    /// Path to `destination` with its distance.
    ///
    /// `None` when the destination is unreachable or when a negative cycle
    /// makes every distance meaningless.
    pub fn shortest_path_with_distance<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<(Path<G::Vertex, G::Edge>, W)>
    where
        G: VertexListGraph + EdgeListGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        let result = self.shortest_paths(graph, source);
        if result.has_negative_cycle() {
            return None;
        }
        let distance = result.distance(destination)?;
        let path = result.path_to(graph, destination)?;
        Some((path, distance))
    }

    pub fn shortest_path<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
    ) -> Option<Path<G::Vertex, G::Edge>>
    where
        G: VertexListGraph + EdgeListGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        self.shortest_path_with_distance(graph, source, destination)
            .map(|(path, _)| path)
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::Graph;

    use super::*;
    use crate::graph::edge_weight;

    #[test]
    fn handles_negative_edges() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let s = graph.add_node("s");
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let t = graph.add_node("t");
        graph.add_edge(s, a, 4);
        graph.add_edge(s, b, 2);
        graph.add_edge(a, b, -3);
        graph.add_edge(b, t, 2);

        let result = BellmanFord::new(edge_weight).shortest_paths(&graph, s);
        assert!(!result.has_negative_cycle());
        assert_eq!(result.distance(b), Some(1));
        assert_eq!(result.distance(t), Some(3));
        assert_eq!(result.path_to(&graph, t).unwrap().vertices(), &[s, a, b, t]);
    }

    #[test]
    fn two_node_graph() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        graph.add_edge(a, b, 2);
        let bellman_ford = BellmanFord::new(edge_weight);

        let (path, distance) = bellman_ford.shortest_path_with_distance(&graph, a, b).unwrap();
        assert_eq!(path.vertices(), &[a, b]);
        assert_eq!(distance, 2);
        assert!(bellman_ford.shortest_path(&graph, b, a).is_none());
    }

    #[test]
    fn detects_reachable_negative_cycle() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let s = graph.add_node("s");
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let t = graph.add_node("t");
        graph.add_edge(s, a, 1);
        graph.add_edge(a, b, -2);
        graph.add_edge(b, a, 1);
        graph.add_edge(b, t, 1);

        let bellman_ford = BellmanFord::new(edge_weight);
        let result = bellman_ford.shortest_paths(&graph, s);
        assert!(result.has_negative_cycle());
        assert!(bellman_ford.shortest_path(&graph, s, t).is_none());
        // The chain into t runs around a <-> b forever; the walk is bounded
        assert!(result.shortest_paths().try_path_to(&graph, t).is_err());
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let s = graph.add_node("s");
        let t = graph.add_node("t");
        let x = graph.add_node("x");
        let y = graph.add_node("y");
        graph.add_edge(s, t, 5);
        graph.add_edge(x, y, -1);
        graph.add_edge(y, x, -1);

        let result = BellmanFord::new(edge_weight).shortest_paths(&graph, s);
        assert!(!result.has_negative_cycle());
        assert_eq!(result.distance(t), Some(5));
        assert_eq!(result.distance(x), None);
    }

    #[derive(Default)]
    struct Events {
        relaxed: usize,
        cycle_edges: usize,
    }

    impl<V, E, W> Visitor<V, E, W> for Events {
        fn edge_relaxed(&mut self, _: E, _: W) {
            self.relaxed += 1;
        }

        fn negative_cycle_detected(&mut self, _: E) {
            self.cycle_edges += 1;
        }
    }

    #[test]
    fn early_exit_does_not_change_distances() {
        let mut graph: Graph<(), i32> = Graph::new();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], 1);
        }
        graph.add_edge(nodes[0], nodes[5], 10);

        let eager = BellmanFord::new(edge_weight).shortest_paths(&graph, nodes[0]);
        let exhaustive = BellmanFord::new(edge_weight)
            .with_early_exit(false)
            .shortest_paths(&graph, nodes[0]);
        for &node in &nodes {
            assert_eq!(eager.distance(node), exhaustive.distance(node));
        }
        assert_eq!(eager.distance(nodes[5]), Some(5));
    }

    #[test]
    fn visitor_sees_cycle_edges() {
        let mut graph: Graph<(), i32> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, -1);
        graph.add_edge(b, a, -1);

        let mut events = Events::default();
        let result = BellmanFord::new(edge_weight).shortest_paths_with_visitor(&graph, a, &mut events);
        assert!(result.has_negative_cycle());
        assert!(events.relaxed > 0);
        assert!(events.cycle_edges > 0);
    }
}
