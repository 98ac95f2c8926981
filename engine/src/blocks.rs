//! Thought-block assembly and target selection.
//!
//! Steps group into blocks with a two-state machine driven by a single fold:
//! a backtrack step closes the open block and seeds a new one; a continue
//! step joins the open block, opening the leading block if none exists yet.
//! Blocks partition the step sequence exactly: no gaps, no overlap, order
//! preserved.

use splice_types::{SpliceError, Step, ThoughtBlock};

enum AssemblerState {
    Empty,
    Accumulating(ThoughtBlock),
}

/// Group a step sequence into thought blocks.
///
/// Every block's first step is a backtrack step, except possibly the leading
/// block, which may consist solely of leading continue steps. An empty step
/// sequence yields an empty block sequence.
#[must_use]
pub fn assemble_blocks(steps: Vec<Step>) -> Vec<ThoughtBlock> {
    let mut blocks = Vec::new();

    let state = steps
        .into_iter()
        .fold(AssemblerState::Empty, |state, step| match state {
            AssemblerState::Empty => AssemblerState::Accumulating(ThoughtBlock::new(step)),
            AssemblerState::Accumulating(mut block) => {
                if step.kind().is_backtrack() {
                    blocks.push(block);
                    AssemblerState::Accumulating(ThoughtBlock::new(step))
                } else {
                    block.push(step);
                    AssemblerState::Accumulating(block)
                }
            }
        });

    if let AssemblerState::Accumulating(block) = state {
        blocks.push(block);
    }
    blocks
}

/// Index of the target block: `floor((B - 1) / 2)`.
///
/// Biases toward the earlier of two middle blocks when `B` is even. `B = 0`
/// is the degenerate case [`SpliceError::EmptyStepSequence`]; the caller's
/// fallback is continuation-only output.
pub fn target_block_index(num_blocks: usize) -> Result<usize, SpliceError> {
    if num_blocks == 0 {
        return Err(SpliceError::EmptyStepSequence);
    }
    Ok((num_blocks - 1) / 2)
}

/// Concatenate the content to keep: the pre-tag text (if any) followed by
/// every step's content across blocks `[0 ..= target_index]`, in order.
#[must_use]
pub fn kept_content(pre_tag: &str, blocks: &[ThoughtBlock], target_index: usize) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !pre_tag.is_empty() {
        parts.push(pre_tag);
    }
    for block in blocks.iter().take(target_index + 1) {
        for step in block.steps() {
            parts.push(step.content());
        }
    }
    parts.join("\n")
}
