//! Outcome and mark state enums.

use crate::errors::PostmarkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The exit path selected when a postmark is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// `commit` was called and `cancel` was not.
    Committed,
    /// `cancel` was called, regardless of any `commit` calls.
    Canceled,
    /// Neither `commit` nor `cancel` was called.
    NoAction,
}

impl Default for Outcome {
    fn default() -> Self {
        Self::NoAction
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed => write!(f, "committed"),
            Self::Canceled => write!(f, "canceled"),
            Self::NoAction => write!(f, "no_action"),
        }
    }
}

impl FromStr for Outcome {
    type Err = PostmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "committed" => Ok(Self::Committed),
            "canceled" => Ok(Self::Canceled),
            "no_action" => Ok(Self::NoAction),
            other => Err(PostmarkError::UnknownOutcome(other.to_string())),
        }
    }
}

impl Outcome {
    /// Returns true if the committed callback is selected.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }

    /// Returns true if the canceled callback is selected.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// Returns true if the fallthrough callback is selected.
    #[must_use]
    pub fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }
}

/// The marks recorded on a live postmark.
///
/// A finalized postmark has been consumed, so there is no variant for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkState {
    /// Nothing recorded yet.
    Fresh,
    /// Only `commit` has been called.
    Committed,
    /// Only `cancel` has been called.
    Canceled,
    /// Both have been called, in any order.
    CommittedAndCanceled,
}

impl Default for MarkState {
    fn default() -> Self {
        Self::Fresh
    }
}

impl fmt::Display for MarkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Committed => write!(f, "committed"),
            Self::Canceled => write!(f, "canceled"),
            Self::CommittedAndCanceled => write!(f, "committed_and_canceled"),
        }
    }
}

impl FromStr for MarkState {
    type Err = PostmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(Self::Fresh),
            "committed" => Ok(Self::Committed),
            "canceled" => Ok(Self::Canceled),
            "committed_and_canceled" => Ok(Self::CommittedAndCanceled),
            other => Err(PostmarkError::UnknownState(other.to_string())),
        }
    }
}

impl MarkState {
    /// Derives the state from the two flags.
    #[must_use]
    pub fn from_flags(committed: bool, canceled: bool) -> Self {
        match (committed, canceled) {
            (false, false) => Self::Fresh,
            (true, false) => Self::Committed,
            (false, true) => Self::Canceled,
            (true, true) => Self::CommittedAndCanceled,
        }
    }

    /// Returns the outcome finalization would select from this state.
    ///
    /// Cancellation dominates commit.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Canceled | Self::CommittedAndCanceled => Outcome::Canceled,
            Self::Committed => Outcome::Committed,
            Self::Fresh => Outcome::NoAction,
        }
    }
}
