//! The graph store: insertion-ordered vertices plus symmetric adjacency.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use stepwise_core::{Error, Result};

use crate::types::{Vertex, VertexId};

/// Default cap on the number of vertices a store will hold.
pub const DEFAULT_VERTEX_LIMIT: usize = 18;

/// Undirected, unweighted graph with insertion-ordered vertices.
///
/// Invariants:
/// - adjacency is symmetric: `neighbors(u)` contains `v` iff `neighbors(v)`
///   contains `u`;
/// - no self-loops, no duplicate edges (edge presence is set membership);
/// - vertex insertion order is stable and is the order every neighbor scan
///   uses, so traversal narration is reproducible.
#[derive(Debug, Clone)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    adjacency: HashMap<VertexId, HashSet<VertexId>>,
    limit: usize,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Create an empty store with the default vertex limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_VERTEX_LIMIT)
    }

    /// Create an empty store with a custom vertex limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            limit,
        }
    }

    /// The configured vertex limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of vertices in the store.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the store holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether the store contains the given vertex.
    pub fn contains(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Add a vertex with the given display value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when the store already holds
    /// `limit` vertices.
    pub fn add_vertex(&mut self, value: impl Into<String>) -> Result<VertexId> {
        if self.vertices.len() >= self.limit {
            return Err(Error::capacity_exceeded(self.limit));
        }
        let vertex = Vertex::new(value);
        let id = vertex.id;
        debug!(vertex = %vertex.value, "Adding vertex");
        self.adjacency.insert(id, HashSet::new());
        self.vertices.push(vertex);
        Ok(id)
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Symmetric and idempotent; a self-loop is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is unknown.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if !self.contains(u) {
            return Err(Error::invalid_vertex(u.to_string()));
        }
        if !self.contains(v) {
            return Err(Error::invalid_vertex(v.to_string()));
        }
        if u == v {
            return Ok(());
        }
        if let Some(set) = self.adjacency.get_mut(&u) {
            set.insert(v);
        }
        if let Some(set) = self.adjacency.get_mut(&v) {
            set.insert(u);
        }
        Ok(())
    }

    /// Check whether an edge between `u` and `v` exists.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// The neighbor set of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `v` is unknown.
    pub fn neighbors(&self, v: VertexId) -> Result<&HashSet<VertexId>> {
        self.adjacency
            .get(&v)
            .ok_or_else(|| Error::invalid_vertex(v.to_string()))
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Look up a vertex by its display value (first match in insertion order).
    pub fn vertex_by_value(&self, value: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.value == value)
    }

    /// The display value of a vertex, if it exists.
    pub fn value_of(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(|v| v.value.as_str())
    }

    /// Iterate vertices in insertion (display) order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Iterate all edges, each undirected edge reported once.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.iter().enumerate().flat_map(|(i, u)| {
            self.vertices
                .iter()
                .skip(i.saturating_add(1))
                .filter(|v| self.has_edge(u.id, v.id))
                .map(|v| (u.id, v.id))
        })
    }

    /// Set the visited marker on a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `id` is unknown.
    pub fn set_mark(&mut self, id: VertexId, mark: bool) -> Result<()> {
        self.vertices
            .iter_mut()
            .find(|v| v.id == id)
            .map(|v| v.mark = mark)
            .ok_or_else(|| Error::invalid_vertex(id.to_string()))
    }

    /// Check the visited marker on a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `id` is unknown.
    pub fn is_marked(&self, id: VertexId) -> Result<bool> {
        self.vertex(id)
            .map(|v| v.mark)
            .ok_or_else(|| Error::invalid_vertex(id.to_string()))
    }

    /// Ids of all currently marked vertices, in insertion order.
    pub fn marked_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|v| v.mark)
            .map(|v| v.id)
            .collect()
    }

    /// Find the first unmarked neighbor of `v` in vertex insertion order.
    ///
    /// This is the deterministic tie-break every traversal step uses: the
    /// scan walks the store's vertex sequence left to right, filtered by
    /// adjacency and by the visited marker, first match wins. Edge insertion
    /// order plays no part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `v` is unknown.
    pub fn first_unmarked_neighbor(&self, v: VertexId) -> Result<Option<VertexId>> {
        let neighbors = self.neighbors(v)?;
        Ok(self
            .vertices
            .iter()
            .find(|candidate| neighbors.contains(&candidate.id) && !candidate.mark)
            .map(|candidate| candidate.id))
    }

    /// Clear every visited marker; edges are untouched.
    pub fn reset_marks(&mut self) {
        for vertex in &mut self.vertices {
            vertex.mark = false;
        }
    }

    /// Remove all vertices and edges.
    ///
    /// Any in-flight traversal run against this store must be superseded by
    /// the caller before clearing.
    pub fn clear(&mut self) {
        debug!(vertices = self.vertices.len(), "Clearing graph store");
        self.vertices.clear();
        self.adjacency.clear();
    }
}
