//! Error types for stepwise operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for stepwise operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph store is full; no further vertices can be added.
    #[error("vertex limit reached ({limit} vertices)")]
    CapacityExceeded { limit: usize },

    /// An operation referenced a vertex that is not in the graph store.
    ///
    /// This is a collaborator contract violation and aborts the current
    /// traversal run rather than being retried.
    #[error("unknown vertex '{vertex}'")]
    InvalidVertex { vertex: String },
}

impl Error {
    /// Create a capacity exceeded error.
    pub fn capacity_exceeded(limit: usize) -> Self {
        Self::CapacityExceeded { limit }
    }

    /// Create an invalid vertex error.
    pub fn invalid_vertex(vertex: impl Into<String>) -> Self {
        Self::InvalidVertex {
            vertex: vertex.into(),
        }
    }
}
