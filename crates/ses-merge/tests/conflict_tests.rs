//! End-to-end conflicting merge scenarios and boundary behaviors.

use ses_merge::{three_way, ConflictRegion, MergeResult};

#[test]
fn conflicting_replacement() {
    let base = vec!['A', 'B', 'C'];
    let ours = vec!['A', 'X', 'C'];
    let theirs = vec!['A', 'Y', 'C'];
    let result = three_way(&base, &ours, &theirs);
    match result {
        MergeResult::Conflict { conflicts, .. } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(
                conflicts[0],
                ConflictRegion { base: vec!['B'], ours: vec!['X'], theirs: vec!['Y'], start_index: 1 }
            );
        }
        MergeResult::Success(_) => panic!("expected a conflict"),
    }
}

#[test]
fn delete_vs_modify() {
    let base = vec!['A', 'B', 'C'];
    let ours = vec!['A', 'C'];
    let theirs = vec!['A', 'X', 'C'];
    let result = three_way(&base, &ours, &theirs);
    match result {
        MergeResult::Conflict { conflicts, .. } => {
            assert_eq!(conflicts.len(), 1);
            assert!(conflicts[0].ours.is_empty());
            assert_eq!(conflicts[0].theirs, vec!['X']);
        }
        MergeResult::Success(_) => panic!("expected a conflict"),
    }
}

#[test]
fn competing_appends() {
    let base = vec!['A', 'B'];
    let ours = vec!['A', 'B', 'X'];
    let theirs = vec!['A', 'B', 'Y'];
    let result = three_way(&base, &ours, &theirs);
    match result {
        MergeResult::Conflict { partial, conflicts } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].start_index, partial.len());
        }
        MergeResult::Success(_) => panic!("expected a conflict"),
    }
}

#[test]
fn empty_base_additions_on_both_sides_conflict() {
    let base: Vec<char> = vec![];
    let ours = vec!['a'];
    let theirs = vec!['b'];
    let result = three_way(&base, &ours, &theirs);
    assert!(!matches!(result, MergeResult::Success(_)));
}

#[test]
fn empty_base_identical_additions_merge_cleanly() {
    // ours == theirs short-circuits before any diffing happens.
    let base: Vec<char> = vec![];
    let side = vec!['a', 'b'];
    let result = three_way(&base, &side, &side);
    assert_eq!(result, MergeResult::Success(side));
}

#[test]
fn partial_omits_conflict_content_and_shares_index_across_consecutive_conflicts() {
    // Two independent single-element conflicts back to back, separated by
    // nothing in between: both should report the same start_index since
    // partial never grows for conflicting content.
    let base = vec!['A', 'B', 'C', 'D'];
    let ours = vec!['A', 'X', 'C', 'Y'];
    let theirs = vec!['A', 'Z', 'C', 'W'];
    let result = three_way(&base, &ours, &theirs);
    match result {
        MergeResult::Conflict { partial, conflicts } => {
            assert_eq!(conflicts.len(), 2);
            assert_eq!(partial, vec!['A', 'C']);
            assert_eq!(conflicts[0].start_index, 1);
            assert_eq!(conflicts[1].start_index, 2);
        }
        MergeResult::Success(_) => panic!("expected conflicts"),
    }
}
