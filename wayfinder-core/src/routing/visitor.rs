//! Optional instrumentation hooks
//!
//! A [`Visitor`] observes a run without influencing it. Every method has a
//! no-op default, so implementors only override the events they care about.

/// Callbacks fired by Dijkstra, A* and Bellman-Ford at well-defined points.
#[allow(unused_variables)]
pub trait Visitor<V, E, W> {
    /// `vertex` received its first tentative cost.
    fn discover_vertex(&mut self, vertex: V, cost: W) {}

    /// `vertex` was popped with its final cost.
    fn finalize_vertex(&mut self, vertex: V, cost: W) {}

    /// `edge` is about to be considered for relaxation.
    fn examine_edge(&mut self, edge: E) {}

    /// `edge` improved the cost of its destination to `cost`.
    fn edge_relaxed(&mut self, edge: E, cost: W) {}

    /// `edge` did not improve its destination.
    fn edge_not_relaxed(&mut self, edge: E) {}

    /// Bellman-Ford could still relax `edge` after the main loop.
    fn negative_cycle_detected(&mut self, edge: E) {}
}

/// Visitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl<V, E, W> Visitor<V, E, W> for NoopVisitor {}

impl<V, E, W, T: Visitor<V, E, W> + ?Sized> Visitor<V, E, W> for &mut T {
    fn discover_vertex(&mut self, vertex: V, cost: W) {
        (**self).discover_vertex(vertex, cost);
    }

    fn finalize_vertex(&mut self, vertex: V, cost: W) {
        (**self).finalize_vertex(vertex, cost);
    }

    fn examine_edge(&mut self, edge: E) {
        (**self).examine_edge(edge);
    }

    fn edge_relaxed(&mut self, edge: E, cost: W) {
        (**self).edge_relaxed(edge, cost);
    }

    fn edge_not_relaxed(&mut self, edge: E) {
        (**self).edge_not_relaxed(edge);
    }

    fn negative_cycle_detected(&mut self, edge: E) {
        (**self).negative_cycle_detected(edge);
    }
}
