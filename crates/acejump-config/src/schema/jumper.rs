//! Controller behavior: dimming, scrolling and narrowing knobs.

use acejump_common::ScrollAlign;
use serde::{Deserialize, Serialize};

/// Dimming of regions without a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DimConfig {
    pub enabled: bool,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Scroll behavior after a jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ScrollConfig {
    pub mode: ScrollAlign,
}

/// Narrowing controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JumperConfig {
    /// Restriction rounds allowed before falling back to label selection.
    /// Unbounded when unset.
    pub max_restrict_rounds: Option<u32>,
    /// Quiescence window before recomputing after a viewport change (ms).
    pub retry_debounce_ms: u64,
    /// Expiry of transient status messages (ms).
    pub status_timeout_ms: u64,
    /// Expiry of prompt messages while waiting for a key (ms).
    pub prompt_timeout_ms: u64,
}

impl Default for JumperConfig {
    fn default() -> Self {
        Self {
            max_restrict_rounds: None,
            retry_debounce_ms: 500,
            status_timeout_ms: 2000,
            prompt_timeout_ms: 5000,
        }
    }
}
