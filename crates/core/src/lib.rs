//! # stepwise-core
//!
//! Shared error and result types for the stepwise workspace.
//!
//! Every fallible operation in the workspace returns [`Result`], and every
//! failure is one of the typed [`Error`] variants. There is no panicking
//! path anywhere in the libraries.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
