//! Tag segmentation of a decomposed trace.
//!
//! A decomposed trace carries step markers, each alone on its own line,
//! followed by the step content running until the next marker or the end of
//! input. Recognition is anchored to the closed vocabulary in
//! [`StepKind::from_marker`]; a line that merely looks like a marker stays
//! part of the surrounding content.

use splice_types::{SpliceError, Step, StepKind};

/// The result of segmenting one decomposed trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedTrace {
    pre_tag: String,
    steps: Vec<Step>,
}

impl SegmentedTrace {
    /// Text preceding the first marker. Not a step; if non-empty it is
    /// prepended unchanged to the kept content during truncation.
    #[must_use]
    pub fn pre_tag(&self) -> &str {
        &self.pre_tag
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Step>) {
        (self.pre_tag, self.steps)
    }
}

/// Split a decomposed trace into tagged steps.
///
/// Returns [`SpliceError::NoTagsFound`] if the text contains no recognized
/// marker at all; the documented v1 fallback for that case lives with the
/// caller.
pub fn segment(decomposed: &str) -> Result<SegmentedTrace, SpliceError> {
    let mut pre_tag_lines: Vec<&str> = Vec::new();
    let mut current: Option<(StepKind, Vec<&str>)> = None;
    let mut steps = Vec::new();

    for line in decomposed.lines() {
        if let Some(kind) = StepKind::from_marker(line.trim()) {
            if let Some((open_kind, content)) = current.take() {
                steps.push(Step::new(open_kind, content.join("\n")));
            }
            current = Some((kind, Vec::new()));
        } else if let Some((_, content)) = current.as_mut() {
            content.push(line);
        } else {
            pre_tag_lines.push(line);
        }
    }

    let Some((open_kind, content)) = current else {
        return Err(SpliceError::NoTagsFound);
    };
    steps.push(Step::new(open_kind, content.join("\n")));

    Ok(SegmentedTrace {
        pre_tag: pre_tag_lines.join("\n"),
        steps,
    })
}
