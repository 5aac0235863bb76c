//! Undirected, unweighted graph store for stepwise traversal runs.
//!
//! The store owns an insertion-ordered sequence of vertices (capped, 18 by
//! default) and a symmetric adjacency relation. Vertex insertion order is
//! display order and also drives the deterministic neighbor-scan tie-break
//! that traversal narration depends on.

pub mod store;
pub mod types;

pub use store::{GraphStore, DEFAULT_VERTEX_LIMIT};
pub use types::{Vertex, VertexId};
