//! Whitespace-agnostic alignment of kept content onto the original text.
//!
//! The tagged copy of a trace may have had its whitespace reformatted by the
//! external decomposition step. The aligner re-derives, in the original
//! text, the prefix whose non-whitespace characters exactly match the kept
//! content, so the splice point is provably the boundary computed on the
//! tagged copy and the output keeps the original formatting.
//!
//! This is a strict ordered-subsequence match, not a fuzzy or edit-distance
//! match: a single diverging non-whitespace character invalidates the whole
//! operation, with no partial result.

use splice_types::SpliceError;

/// Find the prefix of `original_text` whose non-whitespace characters equal
/// those of `kept_content`, in order.
///
/// The returned prefix ends at the character that completed the match and
/// includes every whitespace character of the original up to that point.
/// Empty kept content (no non-whitespace characters) aligns to the empty
/// prefix; the caller decides what degraded output to produce in that case.
pub fn align_prefix(original_text: &str, kept_content: &str) -> Result<String, SpliceError> {
    let target: Vec<char> = kept_content
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    let mut aligned = String::new();
    let mut matched = 0;

    for ch in original_text.chars() {
        if matched == target.len() {
            break;
        }
        aligned.push(ch);
        if ch.is_whitespace() {
            continue;
        }
        if ch != target[matched] {
            return Err(SpliceError::AlignmentMismatch {
                position: matched,
                expected: target[matched],
                found: ch,
            });
        }
        matched += 1;
    }

    if matched < target.len() {
        return Err(SpliceError::InsufficientOriginalText {
            matched,
            expected: target.len(),
        });
    }

    Ok(aligned)
}
