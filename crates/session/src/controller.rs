//! The session controller: one store, at most one active run.

use tracing::{debug, error};

use stepwise_core::Result;
use stepwise_engine::{Advanced, DiscoveryTree, StatsSnapshot, TraversalEngine, Variant};
use stepwise_graph::{GraphStore, VertexId};

use crate::event::UiEvent;

const CONFIRM_NEW_GRAPH: &str = "ARE YOU SURE? Press again to clear old graph";
const NO_ACTIVE_RUN: &str = "No search in progress. Start DFS, BFS or Tree first";

/// Owns the graph store and zero or one traversal engine, and holds the
/// latest narration and stats snapshot (each replacing its predecessor;
/// neither is a log).
///
/// Editing collaborators mutate the graph through [`store_mut`]; they must
/// not interleave with an active run within a single logical action.
///
/// [`store_mut`]: SessionController::store_mut
#[derive(Debug, Default)]
pub struct SessionController {
    store: GraphStore,
    engine: Option<TraversalEngine>,
    renew_pending: bool,
    narration: Option<String>,
    stats: Option<StatsSnapshot>,
}

impl SessionController {
    /// Create a controller with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller around an existing store.
    pub fn with_store(store: GraphStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Dispatch one external event.
    ///
    /// # Errors
    ///
    /// Propagates a store contract violation ([`stepwise_core::Error`])
    /// after aborting the active run.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Advance => self.advance(),
            UiEvent::SelectVertex(pick) => self.select_vertex(pick),
            UiEvent::Run(variant) => {
                self.start(variant);
                Ok(())
            }
            UiEvent::NewGraph => {
                self.request_new_graph();
                Ok(())
            }
        }
    }

    /// Start a fresh run for `variant`, superseding any previous engine
    /// (and with it the previous run's discovery tree), and drive its
    /// first step: the start-vertex prompt.
    pub fn start(&mut self, variant: Variant) {
        self.renew_pending = false;
        self.store.reset_marks();
        self.stats = None;

        debug!(%variant, "Starting traversal run");
        let mut engine = TraversalEngine::new(variant);
        // A fresh engine's first advance always yields the pick prompt.
        if let Ok(Advanced::Step(step)) = engine.advance(&mut self.store) {
            self.narration = Some(step.narration);
        }
        self.engine = Some(engine);
    }

    /// Forward one advance signal to the active engine.
    ///
    /// A clarifying message is narrated when no run is active. A parked
    /// engine (awaiting the start pick) swallows the signal.
    ///
    /// # Errors
    ///
    /// A store contract violation aborts the run, leaves marks as-is, and
    /// is propagated.
    pub fn advance(&mut self) -> Result<()> {
        self.renew_pending = false;
        let Some(engine) = self.engine.as_mut() else {
            self.narration = Some(NO_ACTIVE_RUN.to_string());
            return Ok(());
        };
        match engine.advance(&mut self.store) {
            Ok(Advanced::Step(step)) => {
                self.narration = Some(step.narration);
                if step.stats.is_some() {
                    self.stats = step.stats;
                }
                Ok(())
            }
            Ok(Advanced::Parked) => Ok(()),
            Ok(Advanced::Finished) => {
                // Terminal reset: console and stats revert to defaults.
                self.narration = None;
                self.stats = None;
                self.engine = None;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Traversal step failed; aborting run");
                self.engine = None;
                Err(e)
            }
        }
    }

    /// Forward a start-vertex selection event.
    ///
    /// Only meaningful while the engine awaits the pick; ignored otherwise.
    ///
    /// # Errors
    ///
    /// An unknown vertex id is a collaborator contract violation: the run
    /// is aborted and the error propagated.
    pub fn select_vertex(&mut self, pick: Option<VertexId>) -> Result<()> {
        self.renew_pending = false;
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        match engine.select(&mut self.store, pick) {
            Ok(Some(step)) => {
                self.narration = Some(step.narration);
                if step.stats.is_some() {
                    self.stats = step.stats;
                }
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                error!(error = %e, "Selection failed; aborting run");
                self.engine = None;
                Err(e)
            }
        }
    }

    /// Two-phase graph wipe.
    ///
    /// The first call arms a pending confirmation and narrates a warning;
    /// a second consecutive call clears the store and supersedes any
    /// active run. Any other intervening event disarms the confirmation
    /// without touching the graph.
    pub fn request_new_graph(&mut self) {
        if self.renew_pending {
            debug!("New graph confirmed; clearing store");
            self.engine = None;
            self.store.clear();
            self.renew_pending = false;
            self.narration = None;
            self.stats = None;
        } else {
            self.renew_pending = true;
            self.narration = Some(CONFIRM_NEW_GRAPH.to_string());
        }
    }

    /// The latest narration, if any.
    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    /// The latest stats snapshot, if any.
    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    /// The graph store, for rendering collaborators.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Mutable store access for the editing collaborator.
    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    /// The active run's discovery tree, for edge-highlight rendering.
    pub fn discovery_tree(&self) -> Option<&DiscoveryTree> {
        self.engine.as_ref().map(TraversalEngine::discovery_tree)
    }

    /// Whether tree-edge highlighting is currently active.
    pub fn edge_marking_active(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(TraversalEngine::edge_marking_active)
    }

    /// Ids of currently marked (visited) vertices, for highlight rendering.
    pub fn marked_vertices(&self) -> Vec<VertexId> {
        self.store.marked_vertices()
    }

    /// Whether a run exists and is parked waiting for the start pick.
    pub fn is_awaiting_pick(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(TraversalEngine::is_awaiting_pick)
    }

    /// Whether a run is currently active (including parked and completed
    /// but not yet superseded).
    pub fn has_active_run(&self) -> bool {
        self.engine.is_some()
    }

    /// Whether a new-graph confirmation is pending.
    pub fn is_renew_pending(&self) -> bool {
        self.renew_pending
    }
}
