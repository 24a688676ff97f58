//! Predecessor-map walk shared by all result types

use crate::graph::GraphBase;
use crate::{Error, Path};

/// Walks predecessor edges backward from `destination` until `source`.
///
/// `predecessor(v)` returns the last edge on the best known path into `v`.
/// The walk is bounded by `max_steps` edges so that a corrupted chain (only
/// possible after an unreported negative cycle) fails instead of looping.
///
/// Returns `Ok(None)` when `destination` has no predecessor at all, which
/// means it was never reached.
pub(crate) fn reconstruct_path<G, P>(
    graph: &G,
    source: G::Vertex,
    destination: G::Vertex,
    max_steps: usize,
    predecessor: P,
) -> Result<Option<Path<G::Vertex, G::Edge>>, Error>
where
    G: GraphBase,
    P: Fn(G::Vertex) -> Option<G::Edge>,
{
    if source == destination {
        return Ok(Some(Path::trivial(source)));
    }
    if predecessor(destination).is_none() {
        return Ok(None);
    }

    let mut edges = Vec::new();
    let mut current = destination;
    while current != source {
        if edges.len() >= max_steps {
            log::debug!(
                "Predecessor chain from {destination:?} exceeded {max_steps} steps without reaching {source:?}"
            );
            return Err(Error::BrokenPredecessorChain { steps: max_steps });
        }
        let Some(edge) = predecessor(current) else {
            log::debug!(
                "Predecessor chain from {destination:?} stops at {current:?} before reaching {source:?}"
            );
            return Err(Error::BrokenPredecessorChain { steps: edges.len() });
        };
        let Some(from) = graph.source(edge) else {
            log::debug!("Predecessor edge {edge:?} of {current:?} has no source vertex");
            return Err(Error::dangling_edge(edge));
        };
        current = from;
        edges.push(edge);
    }

    edges.reverse();
    Path::from_edges(graph, source, edges).map(Some)
}
