//! Recording callbacks for tests.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Records the values passed to the callbacks it hands out.
///
/// Clones share the same record, so a clone can be moved into a callback
/// while the original is kept for assertions.
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T> {
    /// Creates a recorder with no calls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a callback that appends its argument to the record.
    pub fn record(&self) -> impl FnOnce(T) {
        let calls = Arc::clone(&self.calls);
        move |value| calls.lock().push(value)
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Removes and returns the recorded calls.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl<T: Clone> CallRecorder<T> {
    /// Returns a copy of the recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl CallRecorder<()> {
    /// Returns a no-argument callback, for the no-action slot.
    pub fn record_unit(&self) -> impl FnOnce() {
        let calls = Arc::clone(&self.calls);
        move || calls.lock().push(())
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CallRecorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallRecorder")
            .field("call_count", &self.call_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_starts_empty() {
        let recorder: CallRecorder<i32> = CallRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_clones_share_record() {
        let recorder = CallRecorder::new();
        let clone = recorder.clone();

        (clone.record())("a");
        (recorder.record())("b");

        assert_eq!(recorder.calls(), vec!["a", "b"]);
        assert_eq!(clone.call_count(), 2);
    }

    #[test]
    fn test_take_clears() {
        let recorder = CallRecorder::new();
        (recorder.record())(1);

        assert_eq!(recorder.take(), vec![1]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_record_unit() {
        let recorder = CallRecorder::new();
        (recorder.record_unit())();
        assert_eq!(recorder.call_count(), 1);
    }
}
