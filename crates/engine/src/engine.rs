//! The suspend/resume traversal state machine.

use std::collections::VecDeque;

use tracing::debug;

use stepwise_core::{Error, Result};
use stepwise_graph::{GraphStore, VertexId};

use crate::tree::DiscoveryTree;
use crate::types::{Advanced, EngineState, RunOutcome, StatsSnapshot, StepOutput, Variant};

/// Internal suspension point. Each phase names what the *next* advance
/// signal will do, mirroring the yield points of the traversal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emit the start-vertex prompt and park.
    AwaitingStart,
    /// Parked; only a selection event transitions out.
    AwaitingPick,
    /// Scan the stack top for its first unmarked neighbor.
    DfsScan,
    /// Dequeue the start vertex and announce its scan.
    BfsDequeueStart,
    /// Scan the queue front for its first unmarked neighbor.
    BfsScan,
    /// The front was exhausted last step; dequeue the next front or, if
    /// the queue is empty, emit the reset prompt.
    BfsShift,
    /// The stack emptied last step; emit the reset prompt (DFS) or the
    /// hide-edges prompt (Tree).
    DfsTail,
    /// Tree only: emit the spanning-tree prompt.
    TreeSpanning,
    /// Perform the terminal reset and complete.
    Reset,
    /// Terminal.
    Completed,
}

/// Suspend/resume traversal computation over a [`GraphStore`].
///
/// One engine drives exactly one run; a new run needs a fresh engine.
/// The engine references store vertices by id only and mutates nothing in
/// the store except the visited markers.
#[derive(Debug)]
pub struct TraversalEngine {
    variant: Variant,
    phase: Phase,
    visited: Vec<VertexId>,
    stack: Vec<VertexId>,
    queue: VecDeque<VertexId>,
    frontier: Option<VertexId>,
    tree: DiscoveryTree,
    mark_edges: bool,
    outcome: Option<RunOutcome>,
}

impl TraversalEngine {
    /// Create a fresh engine for the given algorithm variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            phase: Phase::AwaitingStart,
            visited: Vec::new(),
            stack: Vec::new(),
            queue: VecDeque::new(),
            frontier: None,
            tree: DiscoveryTree::new(),
            mark_edges: variant.marks_edges(),
            outcome: None,
        }
    }

    /// The algorithm variant this engine runs.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Externally observable state.
    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::AwaitingStart => EngineState::AwaitingStart,
            Phase::AwaitingPick => EngineState::AwaitingVertexPick,
            Phase::Completed => EngineState::Completed,
            _ => EngineState::Stepping,
        }
    }

    /// How the run ended, once it has.
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// Vertices in the order this run visited them.
    pub fn visited(&self) -> &[VertexId] {
        &self.visited
    }

    /// The discovery tree built so far (DFS/Tree runs only).
    pub fn discovery_tree(&self) -> &DiscoveryTree {
        &self.tree
    }

    /// Whether tree-edge highlighting is currently active.
    pub fn edge_marking_active(&self) -> bool {
        self.mark_edges
    }

    /// Whether the engine is parked waiting for a start-vertex pick.
    pub fn is_awaiting_pick(&self) -> bool {
        self.phase == Phase::AwaitingPick
    }

    /// Drive the engine one advance signal.
    ///
    /// Performs exactly one atomic traversal step and suspends again.
    /// While parked for a vertex pick this is a no-op ([`Advanced::Parked`]);
    /// once complete it stays complete ([`Advanced::Finished`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if the store no longer knows a
    /// vertex this run references. The error is not recovered: it aborts
    /// the run and leaves marks as-is.
    pub fn advance(&mut self, store: &mut GraphStore) -> Result<Advanced> {
        match self.phase {
            Phase::AwaitingStart => {
                self.phase = Phase::AwaitingPick;
                Ok(Advanced::Step(StepOutput::narrated(
                    "Single-click on vertex from which to start",
                )))
            }
            Phase::AwaitingPick => Ok(Advanced::Parked),
            Phase::DfsScan => self.dfs_scan(store),
            Phase::BfsDequeueStart | Phase::BfsShift => Ok(self.bfs_shift(store)),
            Phase::BfsScan => self.bfs_scan(store),
            Phase::DfsTail => Ok(Advanced::Step(self.dfs_tail())),
            Phase::TreeSpanning => {
                self.phase = Phase::Reset;
                Ok(Advanced::Step(StepOutput::narrated(
                    "Minimum spanning tree; Press again to reset tree",
                )))
            }
            Phase::Reset => {
                self.reset(store);
                Ok(Advanced::Finished)
            }
            Phase::Completed => Ok(Advanced::Finished),
        }
    }

    /// Deliver the start-vertex selection event.
    ///
    /// Only meaningful while parked for the pick; otherwise returns
    /// `Ok(None)` and changes nothing. A `None` pick is the modeled
    /// no-selection outcome and completes the run with an error narration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if the picked id is not in the
    /// store.
    pub fn select(
        &mut self,
        store: &mut GraphStore,
        pick: Option<VertexId>,
    ) -> Result<Option<StepOutput>> {
        if self.phase != Phase::AwaitingPick {
            return Ok(None);
        }
        let Some(start) = pick else {
            debug!(variant = %self.variant, "Run ended without a selection");
            self.outcome = Some(RunOutcome::NoSelection);
            self.phase = Phase::Completed;
            return Ok(Some(StepOutput::narrated("ERROR: Item's not clicked.")));
        };
        if !store.contains(start) {
            return Err(Error::invalid_vertex(start.to_string()));
        }

        store.set_mark(start, true)?;
        self.visited.push(start);
        if self.variant.uses_queue() {
            self.queue.push_back(start);
            self.phase = Phase::BfsDequeueStart;
        } else {
            self.stack.push(start);
            self.phase = Phase::DfsScan;
        }

        let value = self.value_of(store, start);
        debug!(variant = %self.variant, start = %value, "Run started");
        Ok(Some(StepOutput::with_stats(
            format!("Start search from vertex {value}"),
            self.snapshot(store),
        )))
    }

    /// One DFS/Tree step: expand the stack top or backtrack.
    fn dfs_scan(&mut self, store: &mut GraphStore) -> Result<Advanced> {
        let Some(top) = self.stack.last().copied() else {
            // Stack can only be empty here if exhaustion was already
            // narrated; fall through to the tail.
            return Ok(Advanced::Step(self.dfs_tail()));
        };
        if let Some(found) = store.first_unmarked_neighbor(top)? {
            self.tree.record(found, top);
            store.set_mark(found, true)?;
            self.stack.push(found);
            self.visited.push(found);
            let value = self.value_of(store, found);
            debug!(vertex = %value, "Visited vertex");
            return Ok(Advanced::Step(StepOutput::with_stats(
                format!("Visited vertex {value}"),
                self.snapshot(store),
            )));
        }

        self.stack.pop();
        let output = match self.stack.last().copied() {
            Some(next_top) => StepOutput::with_stats(
                format!(
                    "Will check vertices adjacent to {}",
                    self.value_of(store, next_top)
                ),
                self.snapshot(store),
            ),
            None => {
                self.phase = Phase::DfsTail;
                StepOutput::with_stats(
                    "No more vertices with unvisited neighbors",
                    self.snapshot(store),
                )
            }
        };
        Ok(Advanced::Step(output))
    }

    /// One BFS step: expand the current queue front.
    fn bfs_scan(&mut self, store: &mut GraphStore) -> Result<Advanced> {
        let Some(front) = self.frontier else {
            return Ok(self.bfs_shift(store));
        };
        if let Some(found) = store.first_unmarked_neighbor(front)? {
            store.set_mark(found, true)?;
            self.queue.push_back(found);
            self.visited.push(found);
            let value = self.value_of(store, found);
            debug!(vertex = %value, "Visited vertex");
            return Ok(Advanced::Step(StepOutput::with_stats(
                format!("Visited vertex {value}"),
                self.snapshot(store),
            )));
        }

        self.phase = Phase::BfsShift;
        Ok(Advanced::Step(StepOutput::with_stats(
            format!(
                "No more unvisited vertices adjacent to {}",
                self.value_of(store, front)
            ),
            self.snapshot(store),
        )))
    }

    /// Advance the BFS frontier: dequeue the next front, or emit the reset
    /// prompt when the queue is exhausted. Also serves the very first
    /// post-selection step, which dequeues the start vertex.
    fn bfs_shift(&mut self, store: &GraphStore) -> Advanced {
        self.frontier = self.queue.pop_front();
        match self.frontier {
            Some(front) => {
                self.phase = Phase::BfsScan;
                Advanced::Step(StepOutput::with_stats(
                    format!(
                        "Will check vertices adjacent to {}",
                        self.value_of(store, front)
                    ),
                    self.snapshot(store),
                ))
            }
            None => {
                self.phase = Phase::Reset;
                Advanced::Step(StepOutput::narrated("Press again to reset search"))
            }
        }
    }

    /// The advance after DFS exhaustion: reset prompt for plain DFS, the
    /// hide-edges placeholder for Tree mode.
    fn dfs_tail(&mut self) -> StepOutput {
        if self.variant == Variant::Tree {
            self.phase = Phase::TreeSpanning;
            // Placeholder step reserved for future edge-hiding behavior.
            StepOutput::narrated("Press again to hide unmarked edges")
        } else {
            self.phase = Phase::Reset;
            StepOutput::narrated("Press again to reset search")
        }
    }

    /// Terminal side effect: clear all marks and drop edge highlighting.
    fn reset(&mut self, store: &mut GraphStore) {
        debug!(variant = %self.variant, visited = self.visited.len(), "Run complete, resetting marks");
        store.reset_marks();
        self.mark_edges = false;
        self.outcome = Some(RunOutcome::Traversed);
        self.phase = Phase::Completed;
    }

    fn snapshot(&self, store: &GraphStore) -> StatsSnapshot {
        let values =
            |ids: &[VertexId]| -> Vec<String> { ids.iter().map(|id| self.value_of(store, *id)).collect() };
        if self.variant.uses_queue() {
            StatsSnapshot::Bfs {
                visited: values(&self.visited),
                queue: self
                    .queue
                    .iter()
                    .map(|id| self.value_of(store, *id))
                    .collect(),
            }
        } else {
            StatsSnapshot::Dfs {
                visited: values(&self.visited),
                stack: values(&self.stack),
            }
        }
    }

    fn value_of(&self, store: &GraphStore, id: VertexId) -> String {
        store.value_of(id).unwrap_or("?").to_string()
    }
}
