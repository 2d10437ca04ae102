//! Running work under a postmark.

use super::Postmark;
use crate::outcome::Outcome;

/// Runs `work` with mutable access to `postmark`, then finalizes it.
///
/// Returns the closure's result together with the outcome that was
/// dispatched. If `work` panics, the postmark is still finalized while the
/// panic unwinds.
pub fn scoped<'a, C, K, R, F>(mut postmark: Postmark<'a, C, K>, work: F) -> (R, Outcome)
where
    F: FnOnce(&mut Postmark<'a, C, K>) -> R,
{
    let result = work(&mut postmark);
    let outcome = postmark.close();
    (result, outcome)
}
