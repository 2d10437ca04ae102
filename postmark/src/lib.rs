//! # Postmark
//!
//! A scope guard with three mutually exclusive exit paths.
//!
//! A [`Postmark`] wraps a block of work. While the block runs, the caller may
//! mark it as committed or canceled any number of times. When the guard leaves
//! scope, exactly one of three registered callbacks runs:
//!
//! - **Canceled**: `cancel` was called at least once. Cancellation always wins.
//! - **Committed**: `commit` was called and `cancel` was not.
//! - **No action**: neither was called.
//!
//! Callbacks fire at scope exit, never at call time, and each receives the
//! most recent value recorded for its outcome. Unregistered callbacks are
//! silently skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use postmark::prelude::*;
//!
//! let mut audit = Vec::new();
//! {
//!     let mut pm: Postmark<'_, &str, &str> = PostmarkBuilder::new()
//!         .on_committed(|v: &str| audit.push(format!("committed {v}")))
//!         .on_canceled(|v: &str| println!("canceled: {v}"))
//!         .on_no_action(|| println!("nothing happened"))
//!         .build();
//!
//!     pm.commit("order-42");
//! }
//! assert_eq!(audit, vec!["committed order-42".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod guard;
pub mod outcome;
pub mod testing;

pub use crate::errors::PostmarkError;
pub use crate::guard::{scoped, Postmark, PostmarkBuilder};
pub use crate::outcome::{MarkState, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::PostmarkError;
    pub use crate::guard::{scoped, Postmark, PostmarkBuilder};
    pub use crate::outcome::{MarkState, Outcome};
}
