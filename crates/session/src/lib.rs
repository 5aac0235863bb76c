//! Session layer: owns the graph store and at most one traversal run.
//!
//! The [`SessionController`] translates external advance/selection/reset
//! signals into engine resumption and exposes the latest narration and
//! stats snapshot for rendering collaborators. Starting a new run or
//! clearing the graph supersedes any in-flight run.

pub mod controller;
pub mod event;

pub use controller::SessionController;
pub use event::UiEvent;
