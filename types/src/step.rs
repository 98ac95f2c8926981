//! Reasoning steps and thought blocks.
//!
//! A decomposed trace is an ordered sequence of tagged steps. Steps group
//! into thought blocks: a maximal run starting with a backtrack step, or,
//! for the leading block only, a run of pure continuation steps.

use serde::{Deserialize, Serialize};

/// The closed vocabulary of step markers produced by decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Plain forward progress.
    Continue,
    /// Checking, verifying, or correcting previous steps.
    SelfReflection,
    /// Considering or suggesting a different approach.
    AlternativeApproach,
}

impl StepKind {
    /// The literal marker text as it appears alone on its own line in a
    /// decomposed trace.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            StepKind::Continue => "<continue_reasoning>",
            StepKind::SelfReflection => "<self_reflection>",
            StepKind::AlternativeApproach => "<alternative_approach>",
        }
    }

    /// Recognize a marker line. Anything outside the closed vocabulary is
    /// not a marker and remains ordinary content.
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            "<continue_reasoning>" => Some(StepKind::Continue),
            "<self_reflection>" => Some(StepKind::SelfReflection),
            "<alternative_approach>" => Some(StepKind::AlternativeApproach),
            _ => None,
        }
    }

    /// Backtrack steps mark the start of a new thought block.
    #[must_use]
    pub const fn is_backtrack(self) -> bool {
        matches!(
            self,
            StepKind::SelfReflection | StepKind::AlternativeApproach
        )
    }
}

/// One tagged reasoning step. The content is verbatim text from the
/// decomposed trace, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    kind: StepKind,
    content: String,
}

impl Step {
    #[must_use]
    pub fn new(kind: StepKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered, non-empty run of steps.
///
/// Invariant: the first step is a backtrack step, except for the unique
/// leading block of a trace that begins with continuation steps. The
/// assembler upholds this by construction; this type only guarantees
/// non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtBlock {
    steps: Vec<Step>,
}

impl ThoughtBlock {
    /// Start a block with its seed step.
    #[must_use]
    pub fn new(first: Step) -> Self {
        Self { steps: vec![first] }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn first(&self) -> &Step {
        // Non-empty by construction: the only constructor takes a seed step.
        &self.steps[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{Step, StepKind, ThoughtBlock};

    #[test]
    fn marker_round_trips_through_from_marker() {
        for kind in [
            StepKind::Continue,
            StepKind::SelfReflection,
            StepKind::AlternativeApproach,
        ] {
            assert_eq!(StepKind::from_marker(kind.marker()), Some(kind));
        }
    }

    #[test]
    fn unrecognized_markers_are_not_steps() {
        assert_eq!(StepKind::from_marker("<think>"), None);
        assert_eq!(StepKind::from_marker("<backtrack>"), None);
        assert_eq!(StepKind::from_marker("continue_reasoning"), None);
    }

    #[test]
    fn backtrack_classification() {
        assert!(!StepKind::Continue.is_backtrack());
        assert!(StepKind::SelfReflection.is_backtrack());
        assert!(StepKind::AlternativeApproach.is_backtrack());
    }

    #[test]
    fn block_preserves_step_order() {
        let mut block = ThoughtBlock::new(Step::new(StepKind::SelfReflection, "Wait."));
        block.push(Step::new(StepKind::Continue, "So the answer is B."));
        assert_eq!(block.len(), 2);
        assert_eq!(block.first().kind(), StepKind::SelfReflection);
        assert_eq!(block.steps()[1].content(), "So the answer is B.");
    }
}
