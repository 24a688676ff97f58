use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Edge {edge} has no resolvable endpoint")]
    DanglingEdge { edge: String },
    #[error("Edge {index} of the path does not start where the previous one ends")]
    DisconnectedPath { index: usize },
    #[error("Predecessor chain did not reach the source within {steps} steps")]
    BrokenPredecessorChain { steps: usize },
    #[error("Cannot join a path ending at {left} with one starting at {right}")]
    JoinMismatch { left: String, right: String },
}

impl Error {
    pub(crate) fn dangling_edge(edge: impl std::fmt::Debug) -> Self {
        Error::DanglingEdge {
            edge: format!("{edge:?}"),
        }
    }
}
