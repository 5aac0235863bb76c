//! Result type definition and extension traits.
//!
//! Provides functional combinators for Result types, enabling clean error
//! handling without unwrap/expect/panic.

use crate::error::Error;

/// The standard Result type for stepwise operations.
///
/// All fallible operations in the workspace return this type. Use the `?`
/// operator, `match`, or combinator methods to handle results.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
