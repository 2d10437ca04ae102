//! The postmark guard and its builder.
//!
//! This module provides:
//! - `Postmark`, the scope guard that dispatches on drop
//! - `PostmarkBuilder` for registering callbacks incrementally
//! - `scoped` for running a closure under a guard and collecting the outcome

mod builder;
mod postmark;
mod scope;

pub use builder::PostmarkBuilder;
pub use postmark::{CancelCallback, CommitCallback, NoActionCallback, Postmark};
pub use scope::scoped;
