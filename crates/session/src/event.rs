//! External input events consumed by the session controller.

use serde::{Deserialize, Serialize};

use stepwise_engine::Variant;
use stepwise_graph::VertexId;

/// An input event from a user-facing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Opaque "proceed one step" trigger.
    Advance,
    /// Start-vertex pick; `None` models the user completing the pick
    /// suspension without clicking a vertex.
    SelectVertex(Option<VertexId>),
    /// Start a named algorithm run.
    Run(Variant),
    /// Request a graph wipe (two-phase: the second consecutive request
    /// confirms).
    NewGraph,
}
