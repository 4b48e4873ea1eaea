//! Myers' greedy edit-graph search and backtracking.
//!
//! This module holds the actual O(ND) search; [`crate::diff`] is the public
//! entry point that forwards here.

use crate::Change;

/// Compute a diff using the Myers algorithm.
///
/// Handles the trivial empty-input cases directly, then runs the forward
/// search (building a trace of `V` snapshots, one per edit distance `d`)
/// followed by a backtrack over that trace to recover the actual path.
pub fn diff<E: Clone + PartialEq>(original: &[E], modified: &[E]) -> Vec<Change<E>> {
    let n = original.len();
    let m = modified.len();

    if n == 0 && m == 0 {
        return Vec::new();
    }
    if n == 0 {
        return modified
            .iter()
            .enumerate()
            .map(|(i, e)| Change::Insert { index: i, element: e.clone() })
            .collect();
    }
    if m == 0 {
        return original
            .iter()
            .enumerate()
            .map(|(i, e)| Change::Delete { index: i, element: e.clone() })
            .collect();
    }

    let max_d = n + m;
    let v_size = 2 * max_d + 1;
    let offset = max_d as isize;

    // v[k + offset] is the furthest-reaching x on diagonal k for the
    // current edit distance. All entries conventionally start at 0, which
    // makes the d = 0, k = 0 step begin from x = 0 (as if V[1] == 0).
    let mut v = vec![0usize; v_size];
    let mut trace: Vec<Vec<usize>> = Vec::new();

    'outer: for d in 0..=max_d {
        let mut v_next = v.clone();
        let mut k = -(d as isize);
        while k <= d as isize {
            let idx = (k + offset) as usize;

            let down = k == -(d as isize)
                || (k != d as isize && v[((k - 1) + offset) as usize] < v[((k + 1) + offset) as usize]);

            let mut x = if down {
                v[((k + 1) + offset) as usize]
            } else {
                v[((k - 1) + offset) as usize] + 1
            };
            let mut y = (x as isize - k) as usize;

            while x < n && y < m && original[x] == modified[y] {
                x += 1;
                y += 1;
            }
            v_next[idx] = x;

            if x >= n && y >= m {
                trace.push(v_next);
                break 'outer;
            }

            k += 2;
        }
        trace.push(v_next);
        v = trace.last().unwrap().clone();
    }

    backtrack(&trace, n, m, offset, original, modified)
}

/// Walk the trace backwards from `(n, m)` to `(0, 0)`, emitting atoms in
/// reverse order, then reverse the accumulated script.
fn backtrack<E: Clone>(
    trace: &[Vec<usize>],
    n: usize,
    m: usize,
    offset: isize,
    original: &[E],
    modified: &[E],
) -> Vec<Change<E>> {
    let mut changes = Vec::new();
    let mut x = n;
    let mut y = m;

    for d in (0..trace.len()).rev() {
        let k = x as isize - y as isize;

        let prev_k = if d == 0 {
            k
        } else if k == -(d as isize)
            || (k != d as isize
                && trace[d - 1][((k - 1) + offset) as usize] < trace[d - 1][((k + 1) + offset) as usize])
        {
            k + 1
        } else {
            k - 1
        };

        let prev_x = if d == 0 { 0 } else { trace[d - 1][(prev_k + offset) as usize] };
        let prev_y = (prev_x as isize - prev_k) as usize;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            changes.push(Change::Equal { index: x, element: original[x].clone() });
        }

        if d > 0 {
            if x == prev_x {
                y -= 1;
                changes.push(Change::Insert { index: y, element: modified[y].clone() });
            } else {
                x -= 1;
                changes.push(Change::Delete { index: x, element: original[x].clone() });
            }
        }
    }

    changes.reverse();
    changes
}
