use thiserror::Error;

use crate::types::{NodeId, Weight};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied parameter is outside the accepted domain
    /// (non-positive generator parameters, too few nodes to pick two distinct endpoints).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(NodeId),

    /// An explicit edge violates the graph invariants (self-loop or zero weight).
    #[error("Edge {from} -> {to} with weight {weight} is not allowed.")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
