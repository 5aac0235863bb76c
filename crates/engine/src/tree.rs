//! Discovery tree built during DFS-family runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stepwise_graph::VertexId;

/// Parent-pointer mapping recording which vertex discovered which.
///
/// Maps a child vertex to its single discovering parent. Built during
/// DFS and Tree runs, read by rendering collaborators to highlight
/// spanning-tree edges. The relation is lookup-only: the tree never owns
/// vertices and carries no structural pointers back into the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryTree {
    parents: HashMap<VertexId, VertexId>,
}

impl DiscoveryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `parent` discovered `child`.
    ///
    /// A child has exactly one discovering parent; recording again
    /// overwrites, which a correct traversal never does.
    pub fn record(&mut self, child: VertexId, parent: VertexId) {
        self.parents.insert(child, parent);
    }

    /// The discovering parent of `child`, if it was discovered.
    pub fn parent_of(&self, child: VertexId) -> Option<VertexId> {
        self.parents.get(&child).copied()
    }

    /// Check whether the undirected edge `u`-`v` is a tree edge.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.parent_of(v) == Some(u) || self.parent_of(u) == Some(v)
    }

    /// Iterate `(child, parent)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.parents.iter().map(|(c, p)| (*c, *p))
    }

    /// Number of discovered (non-root) vertices.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.parents.clear();
    }
}
