//! Counterfactual splice construction for chain-of-thought reasoning traces.
//!
//! # Architecture
//!
//! The engine turns a reasoning trace into a controlled counterfactual: it
//! finds a semantically meaningful truncation point, keeps everything before
//! it in the original formatting, and appends a corrupted continuation.
//!
//! ```text
//! decomposed trace -> segment -> blocks -> target block -> kept content
//!                                                              |
//! original text ----------------------------------> align -> splice
//! ```
//!
//! The alternate sentence-based strategy skips tagging and alignment and
//! truncates the original text directly at a fixed sentence ratio. Both
//! strategies sit behind [`build_counterfactual`].
//!
//! Everything here is synchronous and pure: no IO, no shared state. Each
//! invocation processes exactly one trace and is independent of any other.

pub mod align;
pub mod blocks;
pub mod continuation;
pub mod segment;
pub mod sentence;
pub mod strategy;
pub mod think;

pub use align::align_prefix;
pub use blocks::{assemble_blocks, kept_content, target_block_index};
pub use continuation::{CONTINUATION_PREAMBLE, CONTINUATION_SEPARATOR, CorruptedContinuation, splice};
pub use segment::{SegmentedTrace, segment};
pub use sentence::splice_by_sentences;
pub use strategy::{CounterfactualRequest, build_counterfactual};
pub use think::{extract_think, prefix_through_think};
