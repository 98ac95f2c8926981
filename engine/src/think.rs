//! Think-region extraction from full model outputs.
//!
//! Reasoning models wrap their chain of thought in `<think>` ... `</think>`.
//! The reasoning trace is the trimmed interior; the prefix is everything up
//! to and including the opening marker line, reattached verbatim in front of
//! the engine's output.

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// The reasoning text between the first `<think>` and `</think>` pair,
/// trimmed. `None` when either marker is missing or they are out of order.
#[must_use]
pub fn extract_think(full_text: &str) -> Option<&str> {
    let start = full_text.find(THINK_OPEN)?;
    let end = full_text.find(THINK_CLOSE)?;
    if start >= end {
        return None;
    }
    Some(full_text[start + THINK_OPEN.len()..end].trim())
}

/// Everything up to and including the `<think>\n` opener, or the empty
/// string when the opener is absent.
#[must_use]
pub fn prefix_through_think(full_text: &str) -> &str {
    let opener = "<think>\n";
    match full_text.find(opener) {
        Some(index) => &full_text[..index + opener.len()],
        None => "",
    }
}
