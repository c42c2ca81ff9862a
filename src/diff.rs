// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Difference reports from an LCS traceback.
//!
//! Walk the table from `(n, m)` back toward the origin. At each cell the
//! branches are tried in a fixed order (changed, added, removed); when none
//! applies the elements match and the walk steps diagonally. Whatever is left
//! once either side is exhausted sits before the first common element and
//! drains as additions at index 0 or removals.
//!
//! Entries come out back to front and are reversed before returning.

use crate::contracts::{check_lcs_table_well_formed, check_report_reconstructs};
use crate::lcs::LcsTable;
use crate::types::{DiffEntry, DiffReport};

/// Describe how `obtained` differs from `expected`.
///
/// Meant for inputs already known to differ; two equal inputs give an empty
/// report. O(n·m) time and space.
pub fn generate_diff<'a, T: PartialEq>(
    obtained: &'a [T],
    expected: &'a [T],
) -> DiffReport<'a, T> {
    let table = LcsTable::build(obtained, expected);
    check_lcs_table_well_formed(&table);

    let entries = traceback(&table, obtained, expected);
    tracing::trace!(
        rows = table.rows(),
        cols = table.cols(),
        lcs = table.lcs_len(),
        entries = entries.len(),
        "traceback complete"
    );

    let report = DiffReport::new(entries);
    check_report_reconstructs(&report, obtained, expected);
    report
}

fn traceback<'a, T: PartialEq>(
    table: &LcsTable,
    obtained: &'a [T],
    expected: &'a [T],
) -> Vec<DiffEntry<'a, T>> {
    let mut entries = Vec::new();
    let mut i = obtained.len();
    let mut j = expected.len();

    while i > 0 && j > 0 {
        let here = table.get(i, j);
        if here == table.get(i - 1, j - 1) && obtained[i - 1] != expected[j - 1] {
            entries.push(DiffEntry::Changed {
                index: j - 1,
                original: &expected[j - 1],
                changed: &obtained[i - 1],
            });
            i -= 1;
            j -= 1;
        } else if here == table.get(i - 1, j) {
            entries.push(DiffEntry::Added {
                index: j,
                element: &obtained[i - 1],
            });
            i -= 1;
        } else if here == table.get(i, j - 1) {
            entries.push(DiffEntry::Removed {
                index: j - 1,
                element: &expected[j - 1],
            });
            j -= 1;
        } else {
            // LCS extended: same element on both sides
            i -= 1;
            j -= 1;
        }
    }

    while i > 0 {
        entries.push(DiffEntry::Added {
            index: 0,
            element: &obtained[i - 1],
        });
        i -= 1;
    }
    while j > 0 {
        entries.push(DiffEntry::Removed {
            index: j - 1,
            element: &expected[j - 1],
        });
        j -= 1;
    }

    entries.reverse();
    entries
}
