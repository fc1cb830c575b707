//! Metrics describing the evolution of a merge run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Reason a merge run terminated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// The configured round limit was reached.
    RoundLimitReached,
    /// The token sequence produced no candidate pairs.
    NoEligiblePairs,
}

/// Snapshot captured for each merge round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundMetrics {
    /// Sequential round number (1-indexed).
    pub round: usize,
    /// Left token of the merged pair.
    pub left: Token,
    /// Right token of the merged pair.
    pub right: Token,
    /// Frequency of the winning pair when it was selected.
    pub frequency: usize,
    /// Token count after the merge was applied.
    pub token_count: usize,
}

/// Aggregate metrics produced by a merge run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeMetrics {
    /// Per-round snapshots accrued during the run.
    pub rounds: Vec<RoundMetrics>,
    /// Total duration of the run.
    pub total_duration: Duration,
    /// Reason the run terminated.
    pub stop_reason: StopReason,
}

impl MergeMetrics {
    /// Creates an empty metrics container with pre-allocated capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            rounds: Vec::with_capacity(capacity),
            total_duration: Duration::ZERO,
            stop_reason: StopReason::RoundLimitReached,
        }
    }
}
