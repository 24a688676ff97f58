use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use petgraph::graph::{Graph, NodeIndex};
use wayfinder_core::prelude::*;

type Grid = Graph<(u32, u32), u32>;

/// Square grid with edges both ways between neighbours and weights that
/// vary with position so ties are rare.
fn grid(side: u32) -> Grid {
    let mut graph = Graph::new();
    for y in 0..side {
        for x in 0..side {
            graph.add_node((x, y));
        }
    }
    let at = |x: u32, y: u32| NodeIndex::new((y * side + x) as usize);
    for y in 0..side {
        for x in 0..side {
            let weight = 1 + (x * 7 + y * 13) % 5;
            if x + 1 < side {
                graph.add_edge(at(x, y), at(x + 1, y), weight);
                graph.add_edge(at(x + 1, y), at(x, y), weight);
            }
            if y + 1 < side {
                graph.add_edge(at(x, y), at(x, y + 1), weight);
                graph.add_edge(at(x, y + 1), at(x, y), weight);
            }
        }
    }
    graph
}

fn corners(graph: &Grid) -> (NodeIndex, NodeIndex) {
    (NodeIndex::new(0), NodeIndex::new(graph.node_count() - 1))
}

fn point_to_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_to_point");
    for side in [30u32, 60] {
        let graph = grid(side);
        let (source, target) = corners(&graph);
        let goal = graph[target];
        let manhattan = move |v: NodeIndex, g: &Grid| {
            let (x, y) = g[v];
            x.abs_diff(goal.0) + y.abs_diff(goal.1)
        };

        let dijkstra = Dijkstra::new(edge_weight);
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, g| {
            b.iter(|| dijkstra.shortest_path(black_box(g), source, target))
        });
        let bidirectional = BidirectionalDijkstra::new(edge_weight);
        group.bench_with_input(BenchmarkId::new("bidirectional", side), &graph, |b, g| {
            b.iter(|| bidirectional.shortest_path(black_box(g), source, target))
        });
        let astar = AStar::new(edge_weight, manhattan);
        group.bench_with_input(BenchmarkId::new("astar", side), &graph, |b, g| {
            b.iter(|| astar.shortest_path(black_box(g), source, target))
        });
        let bellman_ford = BellmanFord::new(edge_weight);
        group.bench_with_input(BenchmarkId::new("bellman_ford", side), &graph, |b, g| {
            b.iter(|| bellman_ford.shortest_path(black_box(g), source, target))
        });
    }
    group.finish();
}

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);
    for side in [8u32, 12] {
        let graph = grid(side);
        let floyd = FloydWarshall::new(edge_weight);
        group.bench_with_input(BenchmarkId::new("floyd_warshall", side), &graph, |b, g| {
            b.iter(|| floyd.all_pairs(black_box(g)))
        });
        let johnson = Johnson::new(edge_weight);
        group.bench_with_input(BenchmarkId::new("johnson", side), &graph, |b, g| {
            b.iter(|| johnson.all_pairs(black_box(g)))
        });
    }
    group.finish();
}

fn k_shortest(c: &mut Criterion) {
    let graph = grid(15);
    let (source, target) = corners(&graph);
    let yen = Yen::new(edge_weight);
    c.bench_function("yen_k8_grid15", |b| {
        b.iter(|| yen.k_shortest_paths(black_box(&graph), source, target, 8))
    });
}

criterion_group!(benches, point_to_point, all_pairs, k_shortest);
criterion_main!(benches);
