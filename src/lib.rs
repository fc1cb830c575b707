//! Trie-based stem/suffix segmentation and a toy pair-merge tokenizer.
//!
//! Two self-contained text experiments share this crate. The first builds
//! path-frequency tries over a word list — forward and character-reversed —
//! and segments each word at its highest branching-entropy point. The second
//! tokenizes a corpus into single characters and repeatedly merges the
//! highest-frequency token pair for a fixed number of rounds, using an
//! all-pairs counting rule and a pinned deterministic tie-break.
//!
//! ```
//! use stemtok::{Merger, MergerConfig, Orientation, StemSplitter};
//!
//! # fn main() -> stemtok::Result<()> {
//! let splitter = StemSplitter::from_words(["walked", "talked", "walks"]);
//! let split = splitter.split("walks", Orientation::Prefix);
//! assert_eq!((split.stem.as_str(), split.suffix.as_str()), ("walk", "s"));
//!
//! let cfg = MergerConfig::builder().show_progress(false).build()?;
//! let outcome = Merger::new(cfg).run("the forest near the forest")?;
//! assert!(!outcome.tokens.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature. Users targeting
//! the library portion only can disable default features:
//! `stemtok = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod merger;
pub mod metrics;
pub mod splitter;
pub mod tokenizer;
pub mod trie;

pub use config::{MergerBuilder, MergerConfig, DEFAULT_MAX_ROUNDS};
pub use corpus::{load_words, WordSource};
pub use error::{Result, StemtokError};
pub use merger::{count_pair_freq, merge_tokens, MergeOutcome, Merger};
pub use metrics::{MergeMetrics, RoundMetrics, StopReason};
pub use splitter::{Orientation, Split, StemSplitter};
pub use tokenizer::{tokenize, Token};
pub use trie::{CharTrie, NodeId};
