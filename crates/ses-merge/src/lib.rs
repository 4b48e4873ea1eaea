//! Three-way merge of two divergent sequences against a common ancestor.
//!
//! Diffs `base` against `ours` and `theirs` independently (via
//! [`ses_diff::diff`]), groups each diff into coarser edit ranges anchored
//! in base indices, then walks both groupings in lockstep over `base` to
//! produce either a merged sequence or a structured conflict report.

mod content;

pub use content::{group_edits, merge_walk, EditRange};

/// A maximal interval of `base` on which `ours` and `theirs` propose
/// incompatible replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRegion<E> {
    /// The contiguous slice of the ancestor covered by the conflict.
    pub base: Vec<E>,
    /// Our competing replacement for `base`.
    pub ours: Vec<E>,
    /// Their competing replacement for `base`.
    pub theirs: Vec<E>,
    /// Offset in the emitted (partial) merged sequence at which this
    /// conflict begins, i.e. the length of the partial result before the
    /// conflict was detected.
    pub start_index: usize,
}

/// Outcome of a three-way merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeResult<E> {
    /// No conflicts; the merged sequence.
    Success(Vec<E>),
    /// One or more conflicting regions.
    Conflict {
        /// The walk output with conflicting regions omitted.
        partial: Vec<E>,
        /// Conflicts in detection order (equivalently, by `start_index`).
        conflicts: Vec<ConflictRegion<E>>,
    },
}

impl<E> MergeResult<E> {
    /// True if the merge produced no conflicts.
    pub fn is_success(&self) -> bool {
        matches!(self, MergeResult::Success(_))
    }
}

/// Perform a three-way merge of `base`, `ours`, and `theirs`.
///
/// Applies the four fast-path equality checks first (see module docs for
/// the main algorithm), falling back to a diff-and-walk merge when none of
/// them apply. Total over finite inputs: never panics, never returns an
/// error — a conflict is an ordinary return value.
pub fn three_way<E: Clone + PartialEq>(base: &[E], ours: &[E], theirs: &[E]) -> MergeResult<E> {
    if base == ours && base == theirs {
        return MergeResult::Success(base.to_vec());
    }
    if base == ours {
        return MergeResult::Success(theirs.to_vec());
    }
    if base == theirs {
        return MergeResult::Success(ours.to_vec());
    }
    if ours == theirs {
        return MergeResult::Success(ours.to_vec());
    }

    let diff_ours = ses_diff::diff(base, ours);
    let diff_theirs = ses_diff::diff(base, theirs);

    let ranges_ours = group_edits(&diff_ours);
    let ranges_theirs = group_edits(&diff_theirs);

    let (result, conflicts) = merge_walk(base, &ranges_ours, &ranges_theirs);

    if conflicts.is_empty() {
        MergeResult::Success(result)
    } else {
        MergeResult::Conflict { partial: result, conflicts }
    }
}

/// A line-oriented three-way merge result, joined back into `String`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMergeResult {
    /// No conflicts; the merged text.
    Success(String),
    /// One or more conflicting regions.
    Conflict {
        /// The walk output (joined) with conflicting regions omitted.
        partial: String,
        /// Conflicts in detection order.
        conflicts: Vec<LineConflict>,
    },
}

/// A [`ConflictRegion`] whose three sides have been joined back into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConflict {
    pub base: String,
    pub ours: String,
    pub theirs: String,
    /// Equal to the inner `start_index`, counted in lines of the partial
    /// output.
    pub start_line: usize,
}

/// Split `base`/`ours`/`theirs` into lines on `separator` (default `"\n"`
/// when `None`), three-way merge the line sequences, then join the result
/// (and each conflict's three sides) back together with the same
/// separator.
pub fn three_way_lines<'a>(
    base: &'a str,
    ours: &'a str,
    theirs: &'a str,
    separator: Option<&str>,
) -> LineMergeResult {
    let sep = separator.unwrap_or("\n");
    let base_lines: Vec<&'a str> = base.split(sep).collect();
    let ours_lines: Vec<&'a str> = ours.split(sep).collect();
    let theirs_lines: Vec<&'a str> = theirs.split(sep).collect();

    match three_way(&base_lines, &ours_lines, &theirs_lines) {
        MergeResult::Success(lines) => LineMergeResult::Success(join(&lines, sep)),
        MergeResult::Conflict { partial, conflicts } => LineMergeResult::Conflict {
            partial: join(&partial, sep),
            conflicts: conflicts
                .into_iter()
                .map(|c| LineConflict {
                    base: join(&c.base, sep),
                    ours: join(&c.ours, sep),
                    theirs: join(&c.theirs, sep),
                    start_line: c.start_index,
                })
                .collect(),
        },
    }
}

fn join(lines: &[&str], sep: &str) -> String {
    lines.join(sep)
}
