//! Word differ.
//!
//! Computes a minimal edit script between the token sequences of two strings
//! (Myers, via `similar`) and folds it into coalesced [`WordDiffOp`]s. Inside
//! a replaced region the deletion always precedes the insertion, and the
//! output is identical for identical inputs.

use similar::{capture_diff_slices, Algorithm, DiffTag};

use crate::diff::model::WordDiffOp;
use crate::diff::tokenize::tokenize;
use crate::errors::{DocDiffError, ExError, Result, Side};

/// Diff primitive used by the aligner and the pairwise comparator.
///
/// Implementations must satisfy the reconstruction contract: Equal+Deleted
/// texts concatenate to `a`, Equal+Inserted texts concatenate to `b`.
pub trait WordDiffer {
    /// # Errors
    ///
    /// - `ComparisonAnomaly`: the diff could not be computed or verified
    fn diff(&self, a: &str, b: &str) -> Result<Vec<WordDiffOp>>;
}

/// Default differ: Myers over word tokens, verified after computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersWordDiffer;

impl WordDiffer for MyersWordDiffer {
    fn diff(&self, a: &str, b: &str) -> Result<Vec<WordDiffOp>> {
        diff_words_checked(a, b)
    }
}

/// Word-level diff of `a` against `b`.
pub fn diff_words(a: &str, b: &str) -> Vec<WordDiffOp> {
    let old = tokenize(a);
    let new = tokenize(b);
    let mut ops = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_op(&mut ops, WordDiffOp::Equal(old[old_range].concat())),
            DiffTag::Delete => push_op(&mut ops, WordDiffOp::Deleted(old[old_range].concat())),
            DiffTag::Insert => push_op(&mut ops, WordDiffOp::Inserted(new[new_range].concat())),
            DiffTag::Replace => {
                push_op(&mut ops, WordDiffOp::Deleted(old[old_range].concat()));
                push_op(&mut ops, WordDiffOp::Inserted(new[new_range].concat()));
            }
        }
    }

    ops
}

/// [`diff_words`] plus a reconstruction check of both sides.
///
/// # Errors
///
/// - `ComparisonAnomaly`: the op sequence does not rebuild `a` or `b`
pub fn diff_words_checked(a: &str, b: &str) -> Result<Vec<WordDiffOp>> {
    let ops = diff_words(a, b);
    if reconstruct_a(&ops) != a {
        return Err(ExError::from(DocDiffError::ReconstructionMismatch { side: Side::A })
            .with_op("diff_words"));
    }
    if reconstruct_b(&ops) != b {
        return Err(ExError::from(DocDiffError::ReconstructionMismatch { side: Side::B })
            .with_op("diff_words"));
    }
    Ok(ops)
}

/// Concatenate the Equal and Deleted texts.
pub fn reconstruct_a(ops: &[WordDiffOp]) -> String {
    ops.iter().filter(|op| op.in_a()).map(WordDiffOp::text).collect()
}

/// Concatenate the Equal and Inserted texts.
pub fn reconstruct_b(ops: &[WordDiffOp]) -> String {
    ops.iter().filter(|op| op.in_b()).map(WordDiffOp::text).collect()
}

/// Append `op`, merging it into the previous op of the same kind.
fn push_op(ops: &mut Vec<WordDiffOp>, op: WordDiffOp) {
    if op.text().is_empty() {
        return;
    }
    if let Some(prev) = ops.last_mut() {
        if prev.kind() == op.kind() {
            match prev {
                WordDiffOp::Equal(text) | WordDiffOp::Inserted(text) | WordDiffOp::Deleted(text) => {
                    text.push_str(op.text())
                }
            }
            return;
        }
    }
    ops.push(op);
}
