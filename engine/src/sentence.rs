//! Sentence-based alternate truncation.
//!
//! A tag-free strategy that operates directly on the original text: split on
//! sentence delimiters, keep the leading three quarters of the sentences,
//! and append the continuation. Strictly simpler and less semantically
//! precise than the tag-based path; the two are not composed.

/// Split `text` on the delimiters `". "` and `".\n\n"`, keeping the
/// delimiters as separate elements. Sentences occupy even-indexed slots,
/// delimiters odd-indexed slots.
fn split_keeping_delimiters(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let bytes = text.as_bytes();

    while i < bytes.len() {
        if bytes[i] == b'.' {
            let rest = &text[i + 1..];
            let delimiter_len = if rest.starts_with(' ') {
                2
            } else if rest.starts_with("\n\n") {
                3
            } else {
                0
            };
            if delimiter_len > 0 {
                parts.push(&text[start..i]);
                parts.push(&text[i..i + delimiter_len]);
                start = i + delimiter_len;
                i = start;
                continue;
            }
        }
        i += 1;
    }

    parts.push(&text[start..]);
    parts
}

/// Truncate `original_text` at the 3/4 sentence mark and append the
/// continuation.
///
/// A text with no sentences at all yields the continuation as the entire
/// result. When the kept text ends exactly on a `". "` delimiter, the
/// trailing space becomes a paragraph break before the continuation;
/// otherwise the continuation is appended directly.
#[must_use]
pub fn splice_by_sentences(original_text: &str, continuation: &str) -> String {
    let parts = split_keeping_delimiters(original_text);

    let mut num_sentences = parts.len().div_ceil(2);
    if parts.last().is_some_and(|part| part.is_empty()) {
        num_sentences -= 1;
    }
    if num_sentences == 0 {
        return continuation.to_string();
    }

    // Keep ceil(3/4) of the sentences; each kept sentence consumes its
    // sentence slot and its following delimiter slot.
    let keep_count = (num_sentences * 3).div_ceil(4);
    let cut_index = keep_count * 2;

    let mut kept: String = parts.iter().take(cut_index).copied().collect();
    if kept.ends_with(". ") {
        kept.truncate(kept.len() - 1);
        kept.push_str("\n\n");
    }
    kept.push_str(continuation);
    kept
}
