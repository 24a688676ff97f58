//! Yen's k shortest loopless paths

use hashbrown::HashSet;

use crate::graph::{FilteredGraph, IncidenceGraph};
use crate::routing::dijkstra::Dijkstra;
use crate::routing::queue::{BinaryHeapFactory, PriorityQueue, QueueFactory};
use crate::{Cost, Path, Weight};

/// Enumerates up to `k` loopless paths between two vertices in
/// non-decreasing weight order.
///
/// Every spur search runs Dijkstra on a [`FilteredGraph`] view; the caller's
/// graph is never modified. Weights must be non-negative.
#[derive(Debug, Clone, Copy)]
pub struct Yen<F, Q = BinaryHeapFactory> {
    weight: F,
    queue: Q,
}

impl<F> Yen<F> {
    pub fn new(weight: F) -> Self {
        Yen {
            weight,
            queue: BinaryHeapFactory,
        }
    }
}

impl<F, Q> Yen<F, Q> {
    /// Queue strategy for the spur searches and the candidate pool.
    pub fn with_queue<Q2: QueueFactory>(self, queue: Q2) -> Yen<F, Q2> {
        Yen {
            weight: self.weight,
            queue,
        }
    }

    pub fn weight(&self) -> &F {
        &self.weight
    }
}

impl<F, Q: QueueFactory> Yen<F, Q> {
    /// The `k` shortest loopless paths, fewer if the graph has fewer.
    ///
    /// Paths are pairwise distinct as vertex sequences. Equal-weight
    /// candidates are returned in the order they were found.
    pub fn k_shortest_paths<G, W>(
        &self,
        graph: &G,
        source: G::Vertex,
        destination: G::Vertex,
        k: usize,
    ) -> Vec<Path<G::Vertex, G::Edge>>
    where
        G: IncidenceGraph,
        F: Fn(G::Edge, &G) -> W,
        W: Weight,
    {
        if k == 0 {
            return Vec::new();
        }
        log::debug!("Yen: up to {k} paths from {source:?} to {destination:?}");

        let spur_search = Dijkstra::new(|edge: G::Edge, view: &FilteredGraph<'_, G>| {
            (self.weight)(edge, view.graph())
        })
        .with_queue(&self.queue);

        let unfiltered = FilteredGraph::new(graph);
        let Some(first) = spur_search.shortest_path(&unfiltered, source, destination) else {
            log::debug!("Yen: {destination:?} unreachable from {source:?}");
            return Vec::new();
        };

        let mut seen: HashSet<Vec<G::Vertex>> = HashSet::new();
        seen.insert(first.vertices().to_vec());
        let mut accepted = vec![first];
        let mut candidates = self.queue.create::<Path<G::Vertex, G::Edge>, Cost<W>>();

        while accepted.len() < k {
            let Some(previous) = accepted.last() else {
                break;
            };

            for spur_index in 0..previous.len() {
                let root = previous.prefix(spur_index);
                let spur = root.destination();

                // Next hops of every accepted path sharing this root, plus
                // the root itself minus the spur. Parallel edges to the same
                // next hop go too, since paths are told apart by vertices.
                let mut view = FilteredGraph::new(graph);
                for path in &accepted {
                    let shares_root = path.len() > spur_index
                        && path.vertices()[..=spur_index] == *root.vertices();
                    if !shares_root {
                        continue;
                    }
                    let next_hop = path.vertices()[spur_index + 1];
                    for edge in graph.outgoing_edges(spur) {
                        if graph.destination(edge) == Some(next_hop) {
                            view.hide_edge(edge);
                        }
                    }
                }
                for &vertex in &root.vertices()[..spur_index] {
                    view.hide_vertex(vertex);
                }

                let Some((spur_path, spur_cost)) =
                    spur_search.shortest_path_with_distance(&view, spur, destination)
                else {
                    continue;
                };
                let root_cost = root.total_weight(graph, &self.weight);
                let Ok(candidate) = root.concat(spur_path) else {
                    continue;
                };
                if seen.insert(candidate.vertices().to_vec()) {
                    candidates.push(candidate, Cost::Finite(root_cost + spur_cost));
                }
            }

            let Some((next, _)) = candidates.pop() else {
                log::debug!("Yen: candidate pool exhausted after {} paths", accepted.len());
                break;
            };
            accepted.push(next);
        }

        log::debug!("Yen: found {} paths", accepted.len());
        accepted
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

    use super::*;
    use crate::graph::edge_weight;

    /// The classic example graph from Yen's paper, `C` to `H`.
    fn classic() -> (Graph<&'static str, u32>, NodeIndex, NodeIndex) {
        let mut graph = Graph::new();
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        let e = graph.add_node("E");
        let f = graph.add_node("F");
        let g = graph.add_node("G");
        let h = graph.add_node("H");
        graph.add_edge(c, d, 3);
        graph.add_edge(c, e, 2);
        graph.add_edge(d, f, 4);
        graph.add_edge(e, d, 1);
        graph.add_edge(e, f, 2);
        graph.add_edge(e, g, 3);
        graph.add_edge(f, g, 2);
        graph.add_edge(f, h, 1);
        graph.add_edge(g, h, 2);
        (graph, c, h)
    }

    fn names(graph: &Graph<&'static str, u32>, path: &Path<NodeIndex, EdgeIndex>) -> String {
        path.vertices().iter().map(|&v| graph[v]).collect()
    }

    #[test]
    fn finds_the_three_classic_paths() {
        let (graph, c, h) = classic();
        let paths = Yen::new(edge_weight).k_shortest_paths(&graph, c, h, 3);

        let found: Vec<(String, u32)> = paths
            .iter()
            .map(|p| (names(&graph, p), p.total_weight(&graph, edge_weight)))
            .collect();
        assert_eq!(
            found,
            vec![
                ("CEFH".to_string(), 5),
                ("CEGH".to_string(), 7),
                ("CDFH".to_string(), 8),
            ]
        );
    }

    #[test]
    fn paths_are_loopless_distinct_and_sorted() {
        let (graph, c, h) = classic();
        let paths = Yen::new(edge_weight).k_shortest_paths(&graph, c, h, 10);

        let weights: Vec<u32> = paths
            .iter()
            .map(|p| p.total_weight(&graph, edge_weight))
            .collect();
        assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(paths.iter().all(|p| !p.has_repeated_vertex()));
        let distinct: HashSet<_> = paths.iter().map(|p| p.vertices().to_vec()).collect();
        assert_eq!(distinct.len(), paths.len());
        // Every loopless C-H path, then the pool runs dry
        assert_eq!(paths.len(), 7);
    }

    #[test]
    fn parallel_edges_do_not_hide_other_routes() {
        let mut graph: Graph<&'static str, u32> = Graph::new();
        let s = graph.add_node("S");
        let x = graph.add_node("X");
        let t = graph.add_node("T");
        graph.add_edge(s, t, 1);
        graph.add_edge(s, t, 1);
        graph.add_edge(s, x, 1);
        graph.add_edge(x, t, 1);

        let paths = Yen::new(edge_weight).k_shortest_paths(&graph, s, t, 3);
        let found: Vec<String> = paths.iter().map(|p| names(&graph, p)).collect();
        assert_eq!(found, vec!["ST", "SXT"]);
    }

    #[test]
    fn equal_weight_candidates_keep_discovery_order() {
        let mut graph: Graph<&'static str, u32> = Graph::new();
        let [s, x, y, t, v, z, w] = ["S", "X", "Y", "T", "V", "Z", "W"].map(|n| graph.add_node(n));
        graph.add_edge(s, x, 1);
        graph.add_edge(x, y, 1);
        graph.add_edge(y, t, 1);
        // Deviations at S and at X, both weighing 4
        graph.add_edge(s, z, 2);
        graph.add_edge(z, w, 1);
        graph.add_edge(w, t, 1);
        graph.add_edge(x, v, 1);
        graph.add_edge(v, t, 2);

        let paths = Yen::new(edge_weight).k_shortest_paths(&graph, s, t, 3);
        let found: Vec<(String, u32)> = paths
            .iter()
            .map(|p| (names(&graph, p), p.total_weight(&graph, edge_weight)))
            .collect();
        assert_eq!(
            found,
            vec![
                ("SXYT".to_string(), 3),
                ("SZWT".to_string(), 4),
                ("SXVT".to_string(), 4),
            ]
        );
    }

    #[test]
    fn degenerate_requests() {
        let (graph, c, h) = classic();
        let yen = Yen::new(edge_weight);

        assert!(yen.k_shortest_paths(&graph, c, h, 0).is_empty());
        assert!(yen.k_shortest_paths(&graph, h, c, 3).is_empty());
        let single = yen.k_shortest_paths(&graph, c, h, 1);
        assert_eq!(names(&graph, &single[0]), "CEFH");
    }
}
