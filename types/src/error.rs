//! Failure taxonomy for counterfactual construction.
//!
//! Every failure is item-scoped and terminal for that item: the engine never
//! retries and never returns a partially spliced trace. Callers are expected
//! to match variants distinctly rather than treat all failures as equivalent.

use thiserror::Error;

/// Everything that can go wrong while building one counterfactual trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    /// The decomposed trace contains none of the recognized step markers.
    ///
    /// The documented v1 fallback is to keep the entire original text and
    /// append the continuation with no alignment step; that policy belongs
    /// to the caller, not here.
    #[error("decomposed trace contains no recognized reasoning tags")]
    NoTagsFound,

    /// Zero thought blocks could be derived from the step sequence.
    #[error("no thought blocks could be derived from the decomposed trace")]
    EmptyStepSequence,

    /// A non-whitespace character in the original text diverged from the
    /// kept content. Alignment is all-or-nothing: no partial prefix exists.
    #[error(
        "original text diverges from kept content at non-whitespace \
         character {position}: expected {expected:?}, found {found:?}"
    )]
    AlignmentMismatch {
        /// Zero-based index into the non-whitespace characters of the kept
        /// content at which the divergence occurred.
        position: usize,
        expected: char,
        found: char,
    },

    /// The original text ran out before the kept content was fully matched.
    #[error(
        "original text exhausted after matching {matched} of {expected} \
         non-whitespace characters of the kept content"
    )]
    InsufficientOriginalText { matched: usize, expected: usize },

    /// The target option letter is outside `A`-`D`. This must stop
    /// processing rather than silently default to some option.
    #[error("unknown target option letter {0:?} (expected one of A-D)")]
    UnknownTargetIndex(String),
}
