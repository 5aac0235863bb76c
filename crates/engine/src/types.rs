//! Public types for the traversal engine.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Algorithm variant a traversal run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Depth-first search.
    Dfs,
    /// Breadth-first search.
    Bfs,
    /// Spanning-tree construction: DFS with edge marking enabled and a
    /// three-phase completion tail instead of the immediate reset prompt.
    Tree,
}

impl Variant {
    /// Whether this variant drives a queue (BFS) rather than a stack.
    pub fn uses_queue(&self) -> bool {
        matches!(self, Self::Bfs)
    }

    /// Whether tree-edge highlighting is active from the start of the run.
    pub fn marks_edges(&self) -> bool {
        matches!(self, Self::Tree)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Tree => "Tree",
        };
        write!(f, "{s}")
    }
}

/// Externally observable engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Fresh engine; the first advance emits the start-vertex prompt.
    AwaitingStart,
    /// Parked until a vertex-selection event arrives. Plain advance
    /// signals are ignored in this state.
    AwaitingVertexPick,
    /// Mid-run; each advance performs exactly one traversal step.
    Stepping,
    /// Terminal. A new run must instantiate a fresh engine.
    Completed,
}

impl EngineState {
    /// Check whether the engine can no longer be driven.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AwaitingStart => "awaiting start",
            Self::AwaitingVertexPick => "awaiting vertex pick",
            Self::Stepping => "stepping",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The traversal ran to exhaustion and performed its terminal reset.
    Traversed,
    /// The user completed the start-pick suspension without choosing a
    /// vertex. A modeled terminal outcome, not an error: declining to
    /// click is valid input.
    NoSelection,
}

/// Snapshot of the transient run state, in display values.
///
/// Stack ordering is bottom-to-top, queue ordering front-to-rear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsSnapshot {
    /// DFS/Tree run state: visited order plus the pending stack.
    Dfs {
        visited: Vec<String>,
        stack: Vec<String>,
    },
    /// BFS run state: visited order plus the pending queue.
    Bfs {
        visited: Vec<String>,
        queue: Vec<String>,
    },
}

impl StatsSnapshot {
    /// The visited-order list.
    pub fn visited(&self) -> &[String] {
        match self {
            Self::Dfs { visited, .. } | Self::Bfs { visited, .. } => visited,
        }
    }
}

impl std::fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dfs { visited, stack } => write!(
                f,
                "Visits: {}. Stack: (b->t): {}",
                visited.iter().join(" "),
                stack.iter().join(" ")
            ),
            Self::Bfs { visited, queue } => write!(
                f,
                "Visits: {}. Queue: (f->r): {}",
                visited.iter().join(" "),
                queue.iter().join(" ")
            ),
        }
    }
}

/// One narrated traversal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Human-readable description of the step, replacing the previous one.
    pub narration: String,
    /// Run-state snapshot at the suspension point, when the step touched
    /// the stack/queue or visited order.
    pub stats: Option<StatsSnapshot>,
}

impl StepOutput {
    /// A step that narrates without a stats update.
    pub fn narrated(narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            stats: None,
        }
    }

    /// A step with both narration and a stats snapshot.
    pub fn with_stats(narration: impl Into<String>, stats: StatsSnapshot) -> Self {
        Self {
            narration: narration.into(),
            stats: Some(stats),
        }
    }
}

/// Result of driving the engine one advance signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advanced {
    /// One step executed; narration and snapshot to display.
    Step(StepOutput),
    /// The engine is waiting for a vertex selection; nothing changed.
    Parked,
    /// The terminal reset ran (or the engine was already complete).
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Dfs.to_string(), "DFS");
        assert_eq!(Variant::Tree.to_string(), "Tree");
        assert!(Variant::Tree.marks_edges());
        assert!(Variant::Bfs.uses_queue());
        assert!(!Variant::Dfs.uses_queue());
    }

    #[test]
    fn test_snapshot_display_matches_console_format() {
        let snap = StatsSnapshot::Dfs {
            visited: vec!["A".into(), "B".into()],
            stack: vec!["A".into(), "B".into()],
        };
        assert_eq!(snap.to_string(), "Visits: A B. Stack: (b->t): A B");

        let snap = StatsSnapshot::Bfs {
            visited: vec!["A".into()],
            queue: vec![],
        };
        assert_eq!(snap.to_string(), "Visits: A. Queue: (f->r): ");
    }

    #[test]
    fn test_engine_state_terminal() {
        assert!(EngineState::Completed.is_terminal());
        assert!(!EngineState::AwaitingVertexPick.is_terminal());
    }
}
