//! Scope guard with commit, cancel and no-action exit paths.

use super::PostmarkBuilder;
use crate::outcome::{MarkState, Outcome};
use std::fmt;
use tracing::{debug, trace};

/// Callback invoked with the last committed value.
pub type CommitCallback<'a, C> = Box<dyn FnOnce(C) + 'a>;

/// Callback invoked with the last cancel value.
pub type CancelCallback<'a, K> = Box<dyn FnOnce(K) + 'a>;

/// Callback invoked when neither commit nor cancel was recorded.
pub type NoActionCallback<'a> = Box<dyn FnOnce() + 'a>;

const UNNAMED: &str = "<unnamed>";

/// The three registered callbacks. Taken out exactly once at finalization.
struct Callbacks<'a, C, K> {
    on_committed: CommitCallback<'a, C>,
    on_canceled: CancelCallback<'a, K>,
    on_no_action: NoActionCallback<'a>,
}

/// A guard that runs one of three callbacks when it leaves scope.
///
/// `commit` and `cancel` only record a value; nothing runs until the guard is
/// dropped or explicitly [`close`](Self::close)d. At that point:
///
/// 1. if `cancel` was ever called, `on_canceled` receives the last cancel value;
/// 2. otherwise, if `commit` was ever called, `on_committed` receives the last
///    commit value;
/// 3. otherwise `on_no_action` runs.
///
/// Cancellation dominates regardless of call order. Callbacks that were never
/// registered are no-ops.
///
/// Finalization happens on every exit path, including `?` propagation and
/// panic unwinding. A callback that panics propagates its panic unchanged;
/// if that happens while the thread is already unwinding, the process aborts.
///
/// The guard is meant to be owned by a single scope and is not thread-safe.
pub struct Postmark<'a, C, K> {
    /// Registered callbacks, `None` once finalized.
    callbacks: Option<Callbacks<'a, C, K>>,
    /// Last committed value, if any.
    commit_value: Option<C>,
    /// Last cancel value, if any.
    cancel_value: Option<K>,
    /// Optional name for log records.
    name: Option<String>,
}

impl<'a, C, K> Postmark<'a, C, K> {
    /// Creates a postmark with all three callbacks registered.
    ///
    /// Use [`PostmarkBuilder`] to register only some of them.
    pub fn new<F, G, H>(on_committed: F, on_canceled: G, on_no_action: H) -> Self
    where
        F: FnOnce(C) + 'a,
        G: FnOnce(K) + 'a,
        H: FnOnce() + 'a,
    {
        Self::from_parts(
            Some(Box::new(on_committed)),
            Some(Box::new(on_canceled)),
            Some(Box::new(on_no_action)),
            None,
        )
    }

    /// Creates a postmark with no callbacks registered.
    #[must_use]
    pub fn noop() -> Self {
        Self::from_parts(None, None, None, None)
    }

    /// Returns a builder for registering callbacks one at a time.
    #[must_use]
    pub fn builder() -> PostmarkBuilder<'a, C, K> {
        PostmarkBuilder::new()
    }

    /// Assembles a postmark, defaulting absent callbacks to no-ops.
    pub(crate) fn from_parts(
        on_committed: Option<CommitCallback<'a, C>>,
        on_canceled: Option<CancelCallback<'a, K>>,
        on_no_action: Option<NoActionCallback<'a>>,
        name: Option<String>,
    ) -> Self {
        Self {
            callbacks: Some(Callbacks {
                on_committed: on_committed.unwrap_or_else(|| Box::new(|_: C| {})),
                on_canceled: on_canceled.unwrap_or_else(|| Box::new(|_: K| {})),
                on_no_action: on_no_action.unwrap_or_else(|| Box::new(|| {})),
            }),
            commit_value: None,
            cancel_value: None,
            name,
        }
    }

    /// Marks the work as committed.
    ///
    /// A later call replaces the stored value. No callback runs here.
    pub fn commit(&mut self, value: C) {
        let overwrote = self.commit_value.replace(value).is_some();
        trace!(postmark = self.label(), overwrote, "Marked as committed");
    }

    /// Marks the work as canceled.
    ///
    /// A later call replaces the stored value. Once canceled, `on_canceled`
    /// is the callback that runs, whatever `commit` calls follow.
    pub fn cancel(&mut self, value: K) {
        let overwrote = self.cancel_value.replace(value).is_some();
        trace!(postmark = self.label(), overwrote, "Marked as canceled");
    }

    /// Returns whether `commit` has been called.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.commit_value.is_some()
    }

    /// Returns whether `cancel` has been called.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.cancel_value.is_some()
    }

    /// Returns the marks recorded so far.
    #[must_use]
    pub fn state(&self) -> MarkState {
        MarkState::from_flags(self.is_committed(), self.is_canceled())
    }

    /// Returns the outcome finalization would select right now.
    #[must_use]
    pub fn pending_outcome(&self) -> Outcome {
        self.state().outcome()
    }

    /// Returns the postmark's name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Finalizes now instead of at scope exit.
    ///
    /// Returns the outcome that was dispatched. Consuming the guard means it
    /// cannot be finalized a second time; the drop that follows is a no-op.
    pub fn close(mut self) -> Outcome {
        self.finalize(true).unwrap_or_default()
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Dispatches exactly one callback. Returns `None` if already finalized.
    fn finalize(&mut self, explicit: bool) -> Option<Outcome> {
        let callbacks = self.callbacks.take()?;
        let outcome = self.pending_outcome();
        let panicking = std::thread::panicking();

        debug!(
            postmark = self.label(),
            outcome = %outcome,
            explicit,
            panicking,
            "Finalizing postmark"
        );

        if let Some(value) = self.cancel_value.take() {
            (callbacks.on_canceled)(value);
        } else if let Some(value) = self.commit_value.take() {
            (callbacks.on_committed)(value);
        } else {
            (callbacks.on_no_action)();
        }

        Some(outcome)
    }
}

impl<C, K> Default for Postmark<'_, C, K> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<C, K> Drop for Postmark<'_, C, K> {
    fn drop(&mut self) {
        self.finalize(false);
    }
}

impl<C, K> fmt::Debug for Postmark<'_, C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Postmark")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("finalized", &self.callbacks.is_none())
            .finish()
    }
}
