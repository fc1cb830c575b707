//! Pair counting, selection, and the iterative merge loop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Instant;

use log::info;
use rustc_hash::FxHashMap;

use crate::config::MergerConfig;
use crate::error::Result;
use crate::metrics::{MergeMetrics, RoundMetrics, StopReason};
use crate::tokenizer::{tokenize, Token};

/// High-level facade running the configured number of merge rounds.
#[derive(Debug, Clone)]
pub struct Merger {
    cfg: MergerConfig,
}

/// Final token sequence and observational metrics of a merge run.
#[must_use]
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Token sequence after the final round.
    pub tokens: Vec<Token>,
    /// Per-round records and the stop reason.
    pub metrics: MergeMetrics,
}

impl Merger {
    /// Creates a merger for the supplied configuration.
    #[must_use]
    pub fn new(cfg: MergerConfig) -> Self {
        Self { cfg }
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &MergerConfig {
        &self.cfg
    }

    /// Tokenizes `text` and runs the merge loop on the result.
    pub fn run(&self, text: &str) -> Result<MergeOutcome> {
        self.run_tokens(tokenize(text))
    }

    /// Runs the merge loop on an already-tokenized sequence.
    ///
    /// Each round recomputes pair frequencies from scratch over the current
    /// sequence, selects the single highest-frequency pair, and applies one
    /// merge. The loop stops early only when the sequence produces no pairs
    /// at all.
    pub fn run_tokens(&self, mut tokens: Vec<Token>) -> Result<MergeOutcome> {
        self.cfg.validate()?;

        let mut metrics = MergeMetrics::new(self.cfg.max_rounds);
        let start = Instant::now();

        for round in 1..=self.cfg.max_rounds {
            let counts = count_pair_freq(&tokens);
            let mut heap = BinaryHeap::with_capacity(counts.len().max(1));
            for (pair, frequency) in counts {
                heap.push(PairScore::new(pair, frequency));
            }
            let Some(best) = heap.pop() else {
                metrics.stop_reason = StopReason::NoEligiblePairs;
                break;
            };

            let (left, right) = best.pair;
            tokens = merge_tokens(&tokens, &left, &right);

            if self.cfg.show_progress {
                info!(
                    "round {:>2} pair ({left:?}, {right:?}) freq {:>6} tokens {:>5}",
                    round,
                    best.frequency,
                    tokens.len()
                );
            }

            metrics.rounds.push(RoundMetrics {
                round,
                left,
                right,
                frequency: best.frequency,
                token_count: tokens.len(),
            });
        }

        metrics.total_duration = start.elapsed();
        Ok(MergeOutcome { tokens, metrics })
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} tokens after {} rounds",
            self.tokens.len(),
            self.metrics.rounds.len()
        )?;
        writeln!(f, "Stop reason: {:?}", self.metrics.stop_reason)?;
        Ok(())
    }
}

/// Heap entry ranking candidate pairs.
///
/// Ordered by frequency, then by the pair itself in ascending lexicographic
/// order, so popping the maximum breaks frequency ties toward the
/// lexicographically greatest `(left, right)`.
#[derive(Clone, Debug, Eq, PartialEq)]
struct PairScore {
    frequency: usize,
    pair: (Token, Token),
}

impl PairScore {
    fn new(pair: (Token, Token), frequency: usize) -> Self {
        Self { frequency, pair }
    }
}

impl Ord for PairScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.pair.cmp(&other.pair))
    }
}

impl PartialOrd for PairScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counts pair frequencies over the full token sequence.
///
/// Every ordered index pair (i, j) is visited — i == j included — and each
/// visit increments both `(tokens[i], tokens[j])` and
/// `(tokens[j], tokens[i])`. A pair's count therefore works out to twice the
/// product of the two tokens' occurrence counts; this is an all-pairs rule,
/// not an adjacency count.
#[must_use]
pub fn count_pair_freq(tokens: &[Token]) -> FxHashMap<(Token, Token), usize> {
    let mut counts = FxHashMap::default();
    for left in tokens {
        for right in tokens {
            *counts.entry((left.clone(), right.clone())).or_insert(0) += 1;
            *counts.entry((right.clone(), left.clone())).or_insert(0) += 1;
        }
    }
    counts
}

/// Replaces the first adjacent occurrence of `left` followed by `right` with
/// their concatenation, copying the remainder unchanged.
///
/// When no adjacent occurrence exists the concatenated token is appended to
/// the end of the sequence instead; an empty input therefore yields exactly
/// `[left + right]`.
#[must_use]
pub fn merge_tokens(tokens: &[Token], left: &str, right: &str) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut index = 0;
    while index < tokens.len() {
        if index + 1 < tokens.len() && tokens[index] == left && tokens[index + 1] == right {
            result.push(format!("{left}{right}"));
            result.extend_from_slice(&tokens[index + 2..]);
            return result;
        }
        result.push(tokens[index].clone());
        index += 1;
    }
    result.push(format!("{left}{right}"));
    result
}
