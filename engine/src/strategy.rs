//! Unified entry point over the two truncation strategies.
//!
//! Both strategies solve "find a truncation point and splice"; they differ
//! only in how the point is computed. The degraded fallbacks of the v1
//! pipeline live here, each logged explicitly:
//!
//! - no recognizable tags (or no decomposition at all): keep the entire
//!   original text and append the continuation with no alignment step;
//! - zero thought blocks, or kept content with no non-whitespace
//!   characters: the continuation becomes the entire output.
//!
//! Alignment failures are never degraded: a mismatched or exhausted
//! original text aborts the item with no output.

use splice_types::{SpliceError, Strategy};

use crate::align::align_prefix;
use crate::blocks::{assemble_blocks, kept_content, target_block_index};
use crate::continuation::splice;
use crate::segment::segment;
use crate::sentence::splice_by_sentences;

/// One item's worth of engine input. All fields are borrowed, in-memory
/// text; the engine performs no IO.
#[derive(Debug, Clone, Copy)]
pub struct CounterfactualRequest<'a> {
    /// The untagged ground-truth reasoning text, in its original formatting.
    pub original_text: &'a str,
    /// The tagged decomposition of the same reasoning, if available. Only
    /// consulted by [`Strategy::TagMidpoint`].
    pub decomposed_trace: Option<&'a str>,
    /// The rendered corrupted continuation to splice in.
    pub continuation: &'a str,
}

/// Build one counterfactual trace.
///
/// Returns the truncated original text with the continuation spliced in, or
/// the item-scoped error. Idempotent: identical inputs produce byte-identical
/// output.
pub fn build_counterfactual(
    strategy: Strategy,
    request: &CounterfactualRequest<'_>,
) -> Result<String, SpliceError> {
    match strategy {
        Strategy::TagMidpoint => tag_midpoint(request),
        Strategy::SentenceRatio => Ok(splice_by_sentences(
            request.original_text,
            request.continuation,
        )),
    }
}

fn tag_midpoint(request: &CounterfactualRequest<'_>) -> Result<String, SpliceError> {
    let segmented = match request.decomposed_trace.map(segment) {
        Some(Ok(segmented)) => segmented,
        Some(Err(SpliceError::NoTagsFound)) | None => {
            // v1 fallback: degraded output, documented and accepted.
            tracing::warn!(
                "no reasoning tags found; keeping the entire original text"
            );
            return Ok(splice(request.original_text, request.continuation));
        }
        Some(Err(err)) => return Err(err),
    };

    let (pre_tag, steps) = segmented.into_parts();
    let blocks = assemble_blocks(steps);

    let target_index = match target_block_index(blocks.len()) {
        Ok(index) => index,
        Err(SpliceError::EmptyStepSequence) => {
            tracing::warn!("no thought blocks; output is the continuation alone");
            return Ok(request.continuation.to_string());
        }
        Err(err) => return Err(err),
    };
    tracing::debug!(num_blocks = blocks.len(), target_index, "selected target block");

    let kept = kept_content(&pre_tag, &blocks, target_index);
    if kept.chars().all(char::is_whitespace) {
        tracing::warn!("kept content is empty; output is the continuation alone");
        return Ok(request.continuation.to_string());
    }

    let aligned = align_prefix(request.original_text, &kept)?;
    Ok(splice(&aligned, request.continuation))
}

#[cfg(test)]
mod tests {
    use super::{CounterfactualRequest, build_counterfactual};
    use splice_types::{SpliceError, Strategy};

    #[test]
    fn tag_midpoint_splices_after_the_middle_block() {
        let request = CounterfactualRequest {
            original_text: "A. Wait. B.",
            decomposed_trace: Some(
                "<continue_reasoning>\nA.\n<self_reflection>\nWait.\n<continue_reasoning>\nB.",
            ),
            continuation: "corrupted",
        };

        let result = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        assert_eq!(result, "A.\n\ncorrupted");
    }

    #[test]
    fn tag_midpoint_without_tags_keeps_whole_text() {
        let request = CounterfactualRequest {
            original_text: "No tags anywhere.",
            decomposed_trace: Some("No tags anywhere."),
            continuation: "corrupted",
        };

        let result = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        assert_eq!(result, "No tags anywhere.\n\ncorrupted");
    }

    #[test]
    fn tag_midpoint_without_decomposition_keeps_whole_text() {
        let request = CounterfactualRequest {
            original_text: "Original only.",
            decomposed_trace: None,
            continuation: "corrupted",
        };

        let result = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        assert_eq!(result, "Original only.\n\ncorrupted");
    }

    #[test]
    fn tag_midpoint_with_empty_kept_content_is_continuation_only() {
        // A single trailing marker with no content: one block whose only
        // step has empty content.
        let request = CounterfactualRequest {
            original_text: "whatever",
            decomposed_trace: Some("<self_reflection>"),
            continuation: "corrupted",
        };

        let result = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        assert_eq!(result, "corrupted");
    }

    #[test]
    fn tag_midpoint_propagates_alignment_mismatch() {
        let request = CounterfactualRequest {
            original_text: "A different text entirely.",
            decomposed_trace: Some("<continue_reasoning>\nA. B.\n<self_reflection>\nWait."),
            continuation: "corrupted",
        };

        let err = build_counterfactual(Strategy::TagMidpoint, &request).unwrap_err();
        assert!(matches!(err, SpliceError::AlignmentMismatch { .. }));
    }

    #[test]
    fn tag_midpoint_propagates_insufficient_original_text() {
        let request = CounterfactualRequest {
            original_text: "A.",
            decomposed_trace: Some("<continue_reasoning>\nA. B. C.\n<self_reflection>\nWait."),
            continuation: "corrupted",
        };

        let err = build_counterfactual(Strategy::TagMidpoint, &request).unwrap_err();
        assert!(matches!(err, SpliceError::InsufficientOriginalText { .. }));
    }

    #[test]
    fn sentence_ratio_ignores_the_decomposition() {
        let request = CounterfactualRequest {
            original_text: "One. Two. Three. Four.",
            decomposed_trace: Some("<continue_reasoning>\nunrelated"),
            continuation: "corrupted",
        };

        let result = build_counterfactual(Strategy::SentenceRatio, &request).unwrap();
        assert_eq!(result, "One. Two. Three.\n\ncorrupted");
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let request = CounterfactualRequest {
            original_text: "A. Wait. B.",
            decomposed_trace: Some(
                "<continue_reasoning>\nA.\n<self_reflection>\nWait.\n<continue_reasoning>\nB.",
            ),
            continuation: "corrupted",
        };

        let first = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        let second = build_counterfactual(Strategy::TagMidpoint, &request).unwrap();
        assert_eq!(first, second);
    }
}
