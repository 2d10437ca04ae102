//! Fluent builder for postmarks.

use super::postmark::{CancelCallback, CommitCallback, NoActionCallback};
use super::Postmark;
use std::fmt;

/// Builder for registering a postmark's callbacks in any order.
///
/// Every setter may be called repeatedly; the last call for a slot wins.
/// Slots left empty become no-ops in the built postmark.
pub struct PostmarkBuilder<'a, C, K> {
    /// Callback for the committed outcome.
    on_committed: Option<CommitCallback<'a, C>>,
    /// Callback for the canceled outcome.
    on_canceled: Option<CancelCallback<'a, K>>,
    /// Callback for the no-action outcome.
    on_no_action: Option<NoActionCallback<'a>>,
    /// Name used in log records.
    name: Option<String>,
}

impl<'a, C, K> PostmarkBuilder<'a, C, K> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_committed: None,
            on_canceled: None,
            on_no_action: None,
            name: None,
        }
    }

    /// Registers the callback run when the postmark was committed.
    #[must_use]
    pub fn on_committed<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(C) + 'a,
    {
        self.on_committed = Some(Box::new(callback));
        self
    }

    /// Registers the callback run when the postmark was canceled.
    #[must_use]
    pub fn on_canceled<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(K) + 'a,
    {
        self.on_canceled = Some(Box::new(callback));
        self
    }

    /// Registers the callback run when neither commit nor cancel happened.
    #[must_use]
    pub fn on_no_action<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        self.on_no_action = Some(Box::new(callback));
        self
    }

    /// Sets the name attached to the postmark's log records.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the postmark.
    #[must_use]
    pub fn build(self) -> Postmark<'a, C, K> {
        Postmark::from_parts(
            self.on_committed,
            self.on_canceled,
            self.on_no_action,
            self.name,
        )
    }
}

impl<C, K> Default for PostmarkBuilder<'_, C, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K> fmt::Debug for PostmarkBuilder<'_, C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostmarkBuilder")
            .field("name", &self.name)
            .field("on_committed", &self.on_committed.is_some())
            .field("on_canceled", &self.on_canceled.is_some())
            .field("on_no_action", &self.on_no_action.is_some())
            .finish()
    }
}
