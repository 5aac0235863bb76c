//! Stepwise traversal engine for DFS, BFS and spanning-tree construction.
//!
//! The engine is a suspend/resume state machine over a
//! [`GraphStore`](stepwise_graph::GraphStore). It executes exactly one
//! atomic traversal step per external advance signal, yielding a narration
//! string and a stats snapshot, then suspends until the next signal. At one
//! well-defined point it parks and waits for a vertex-selection event
//! instead.
//!
//! Key properties:
//!
//! - **One step per advance**: a step never yields more than once; paired
//!   observations ("no more neighbors", then "will check X") are separate
//!   steps on separate signals.
//! - **Deterministic scan order**: neighbor scans always walk the store's
//!   vertex insertion order, so narration is replayable.
//! - **Bounded lifetime**: the terminal advance clears all marks; a new run
//!   requires a fresh engine.
//!
//! Cooperative and single-threaded by contract: the engine never runs two
//! steps concurrently and never runs while waiting for input.

pub mod engine;
pub mod tree;
pub mod types;

pub use engine::TraversalEngine;
pub use tree::DiscoveryTree;
pub use types::{Advanced, EngineState, RunOutcome, StatsSnapshot, StepOutput, Variant};
