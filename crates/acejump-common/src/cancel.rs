//! Reasons a jump ends without moving the cursor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of cancellation reasons.
///
/// None of these are errors: each ends the current jump, surfaces as a short
/// status message and returns the controller to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelReason {
    Cancel,
    ChangedActiveEditor,
    ChangedVisibleRanges,
    EmptyValue,
    NoMatches,
    NoPlaceholderMatched,
    NoActiveEditor,
    NoVisibleRange,
}

impl CancelReason {
    /// Status bar text shown when a jump ends for this reason.
    pub fn message(self) -> &'static str {
        match self {
            CancelReason::EmptyValue => "Empty Value",
            CancelReason::ChangedActiveEditor => "Changed editor",
            CancelReason::ChangedVisibleRanges => "Changed visible range",
            CancelReason::NoMatches | CancelReason::NoPlaceholderMatched => "No Matches",
            CancelReason::NoActiveEditor => "No active editor",
            CancelReason::NoVisibleRange => "No visible range",
            CancelReason::Cancel => "Canceled",
        }
    }

    /// Only a viewport change restarts the computation; every other reason
    /// is terminal for the invocation.
    pub fn is_retryable(self) -> bool {
        matches!(self, CancelReason::ChangedVisibleRanges)
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
