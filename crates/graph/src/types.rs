//! Vertex types for the graph store.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(Ulid);

impl VertexId {
    /// Create a new random vertex ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Create from a ULID.
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Get the inner ULID.
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex: stable identity, display value, and a visited marker.
///
/// Owned by the [`GraphStore`](crate::GraphStore); traversal runs reference
/// vertices by id and flip `mark` through store accessors. The marker is
/// true exactly while the vertex sits in the current run's visited order
/// and is cleared between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique vertex identifier.
    pub id: VertexId,
    /// Human-readable display value.
    pub value: String,
    /// Visited flag for the in-flight traversal run.
    pub mark: bool,
}

impl Vertex {
    /// Create a new unmarked vertex with the given display value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: VertexId::new(),
            value: value.into(),
            mark: false,
        }
    }
}
