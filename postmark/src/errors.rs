//! Error types for the postmark crate.
//!
//! Callbacks themselves are infallible closures: a callback that panics
//! propagates that panic out of finalization unchanged. The errors here cover
//! the value types that can be parsed from text.

use thiserror::Error;

/// The main error type for postmark operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostmarkError {
    /// The string is not a known outcome name.
    #[error("Unknown outcome: '{0}'")]
    UnknownOutcome(String),

    /// The string is not a known mark state name.
    #[error("Unknown mark state: '{0}'")]
    UnknownState(String),
}
