//! Core domain types for Splice.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the pipeline.

mod error;
mod options;
mod step;

pub use error::SpliceError;
pub use options::{OptionLetter, OptionSet};
pub use step::{Step, StepKind, ThoughtBlock};

use serde::{Deserialize, Serialize};

// ============================================================================
// Strategy & Template Selection
// ============================================================================

/// How the truncation point in the original text is computed.
///
/// Both strategies solve "find a truncation point and splice"; they differ
/// only in how the point is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Segment the tagged decomposition into thought blocks, keep up to the
    /// middle block, and re-align that boundary against the original text.
    #[default]
    TagMidpoint,
    /// Split the original text into sentences and keep the leading 3/4,
    /// bypassing tags and alignment entirely.
    SentenceRatio,
}

impl Strategy {
    /// Parse a strategy name from configuration or CLI input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tag-midpoint" | "tag" => Some(Strategy::TagMidpoint),
            "sentence-ratio" | "sentence" => Some(Strategy::SentenceRatio),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::TagMidpoint => "tag-midpoint",
            Strategy::SentenceRatio => "sentence-ratio",
        }
    }

    /// All available strategies.
    #[must_use]
    pub fn all() -> &'static [Strategy] {
        &[Strategy::TagMidpoint, Strategy::SentenceRatio]
    }
}

/// Which wording the corrupted continuation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContinuationTemplate {
    /// Restate all four options with the target option replaced by the
    /// perturbed text.
    #[default]
    RestateAll,
    /// Name only the target option and its perturbed text.
    SingleOption,
}

impl ContinuationTemplate {
    /// Parse a template name from configuration or CLI input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restate-all" | "restate" => Some(ContinuationTemplate::RestateAll),
            "single-option" | "single" => Some(ContinuationTemplate::SingleOption),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContinuationTemplate::RestateAll => "restate-all",
            ContinuationTemplate::SingleOption => "single-option",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
