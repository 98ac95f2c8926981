//! Corrupted-continuation rendering and splicing.
//!
//! The continuation expresses doubt and presents the perturbed option,
//! either restating all four options with the target replaced or naming
//! only the target option. The splicer appends it after the aligned prefix
//! separated by a blank line.

use std::fmt::Write;

use splice_types::{OptionLetter, OptionSet};

/// Fixed lead-in shared by both templates.
pub const CONTINUATION_PREAMBLE: &str = "But I'm not sure. Let me check again.";

/// Blank-line separator between the kept prefix and the continuation.
pub const CONTINUATION_SEPARATOR: &str = "\n\n";

/// A synthesized corrupted continuation, one variant per template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptedContinuation<'a> {
    /// Restate all four options with the target option's text replaced by
    /// the perturbed text.
    RestateAll {
        options: &'a OptionSet,
        target: OptionLetter,
        perturbed: &'a str,
    },
    /// Name only the target option and its perturbed text.
    SingleOption {
        target: OptionLetter,
        perturbed: &'a str,
    },
}

impl CorruptedContinuation<'_> {
    /// Render the continuation text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            CorruptedContinuation::RestateAll {
                options,
                target,
                perturbed,
            } => {
                let mut out = String::from(CONTINUATION_PREAMBLE);
                for (letter, original) in options.iter() {
                    let text = if letter == *target { *perturbed } else { original };
                    let _ = write!(out, " Option {letter}: {}", ensure_terminal_punctuation(text));
                }
                out
            }
            CorruptedContinuation::SingleOption { target, perturbed } => {
                format!("{CONTINUATION_PREAMBLE} Option {target}: {perturbed}")
            }
        }
    }
}

/// Append the continuation after the kept prefix.
///
/// An empty prefix means the continuation becomes the entire result, with
/// no leading separator.
#[must_use]
pub fn splice(prefix: &str, continuation: &str) -> String {
    if prefix.is_empty() {
        continuation.to_string()
    } else {
        format!("{prefix}{CONTINUATION_SEPARATOR}{continuation}")
    }
}

/// Normalize an option text to end with terminal punctuation.
fn ensure_terminal_punctuation(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}
