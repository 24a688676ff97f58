//! All-pairs results stored as dense `V x V` matrices

use std::fmt::Debug;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

use super::reconstruct::reconstruct_path;
use crate::graph::GraphBase;
use crate::{Cost, Error, Path, Weight};

/// Distances and predecessor edges between every ordered vertex pair.
///
/// `predecessor(u, v)` is the last edge on the best path from `u` to `v`.
/// Vertices unknown to the result are treated as unreachable.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<V, E, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    distances: Vec<Cost<W>>,
    predecessors: Vec<Option<E>>,
    on_negative_cycle: FixedBitSet,
    has_negative_cycle: bool,
}

impl<V, E, W> AllPairsShortestPaths<V, E, W>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
    W: Weight,
{
    /// Square matrix over `vertices` with a zero diagonal and nothing else
    /// reachable.
    pub(crate) fn with_vertices(vertices: Vec<V>) -> Self {
        let n = vertices.len();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();
        let mut distances = vec![Cost::Infinite; n * n];
        for i in 0..n {
            distances[i * n + i] = Cost::zero();
        }

        AllPairsShortestPaths {
            vertices,
            index,
            distances,
            predecessors: vec![None; n * n],
            on_negative_cycle: FixedBitSet::with_capacity(n),
            has_negative_cycle: false,
        }
    }

    /// The empty result returned when the computation was abandoned because
    /// of a negative cycle.
    pub(crate) fn abandoned() -> Self {
        let mut result = Self::with_vertices(Vec::new());
        result.has_negative_cycle = true;
        result
    }

    pub(crate) fn order(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn index_of(&self, vertex: V) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    pub(crate) fn cost_at(&self, i: usize, j: usize) -> Cost<W> {
        self.distances[i * self.order() + j]
    }

    pub(crate) fn predecessor_at(&self, i: usize, j: usize) -> Option<E> {
        self.predecessors[i * self.order() + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, cost: Cost<W>, predecessor: Option<E>) {
        let n = self.order();
        self.distances[i * n + j] = cost;
        self.predecessors[i * n + j] = predecessor;
    }

    /// Flags every vertex whose diagonal entry went below zero.
    pub(crate) fn mark_negative_diagonal(&mut self) {
        let zero = Cost::zero();
        for i in 0..self.order() {
            if self.cost_at(i, i).improves_on(&zero) {
                self.on_negative_cycle.insert(i);
                self.has_negative_cycle = true;
            }
        }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// `true` for the empty result of an abandoned computation or a graph
    /// without vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// When set, distances are not trustworthy; Johnson also leaves the
    /// result empty.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Whether `vertex` lies on a negative cycle found by the diagonal check.
    pub fn is_on_negative_cycle(&self, vertex: V) -> bool {
        self.index_of(vertex)
            .is_some_and(|i| self.on_negative_cycle.contains(i))
    }

    pub fn distance(&self, from: V, to: V) -> Cost<W> {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.cost_at(i, j),
            _ => Cost::Infinite,
        }
    }

    pub fn predecessor(&self, from: V, to: V) -> Option<E> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.predecessor_at(i, j)
    }

    /// Row of `from`: every vertex paired with its distance.
    pub fn distances_from(&self, from: V) -> impl Iterator<Item = (V, Cost<W>)> + '_ {
        let row = self.index_of(from);
        self.vertices.iter().enumerate().map(move |(j, &to)| {
            let cost = row.map_or(Cost::Infinite, |i| self.cost_at(i, j));
            (to, cost)
        })
    }

    /// Rebuilds the path from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Fails when the predecessor chain is corrupted by a negative cycle.
    pub fn try_path<G>(&self, graph: &G, from: V, to: V) -> Result<Option<Path<V, E>>, Error>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        if self.distance(from, to).is_infinite() {
            return Ok(None);
        }
        reconstruct_path(graph, from, to, self.order(), |v| self.predecessor(from, v))
    }

    pub fn path<G>(&self, graph: &G, from: V, to: V) -> Option<Path<V, E>>
    where
        G: GraphBase<Vertex = V, Edge = E>,
    {
        self.try_path(graph, from, to).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_matrix_has_zero_diagonal() {
        let result: AllPairsShortestPaths<u8, u8, i32> =
            AllPairsShortestPaths::with_vertices(vec![1, 2]);
        assert_eq!(result.distance(1, 1), Cost::Finite(0));
        assert_eq!(result.distance(1, 2), Cost::Infinite);
        assert_eq!(result.distance(9, 1), Cost::Infinite);
        assert!(!result.has_negative_cycle());
    }

    #[test]
    fn negative_diagonal_is_flagged() {
        let mut result: AllPairsShortestPaths<u8, u8, i32> =
            AllPairsShortestPaths::with_vertices(vec![1, 2]);
        result.set(1, 1, Cost::Finite(-3), None);
        result.mark_negative_diagonal();
        assert!(result.has_negative_cycle());
        assert!(result.is_on_negative_cycle(2));
        assert!(!result.is_on_negative_cycle(1));
    }

    #[test]
    fn abandoned_result_is_empty() {
        let result: AllPairsShortestPaths<u8, u8, i32> = AllPairsShortestPaths::abandoned();
        assert!(result.is_empty());
        assert!(result.has_negative_cycle());
    }
}
