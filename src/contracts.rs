// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the diff engine.
//!
//! Debug-mode assertions on the LCS table and on the reports built from it.
//! They compile to nothing in release builds and fire during tests and fuzzing.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                    |
//! |-------------------------------|---------------------------------------------|
//! | `check_lcs_table_well_formed` | zero base row/column, DP recurrence bounds  |
//! | `check_report_ordered`        | entry indices ascending, inside *expected*  |
//! | `check_report_reconstructs`   | applying the report to *expected* gives *obtained* |
//!
//! # Usage
//!
//! ```ignore
//! use listeq::contracts::*;
//!
//! // In debug builds, this panics if the report is incomplete
//! check_report_reconstructs(&report, obtained, expected);
//!
//! // In release builds, this is a no-op
//! ```

use crate::lcs::LcsTable;
use crate::testing::reconstruct_obtained;
use crate::types::DiffReport;

// ============================================================================
// LCS TABLE CONTRACTS
// ============================================================================

/// Check the shape of a filled LCS table.
///
/// Row 0 and column 0 are zero; every other cell is at least its upper and
/// left neighbours and at most one more than its diagonal neighbour.
///
/// # Panics (debug builds only)
/// Panics if any cell breaks those bounds.
#[inline]
pub fn check_lcs_table_well_formed(table: &LcsTable) {
    if !cfg!(debug_assertions) {
        return;
    }

    for i in 0..table.rows() {
        debug_assert_eq!(
            table.get(i, 0),
            0,
            "Contract violation: LcsTable.BaseColumn - cell ({}, 0) is nonzero",
            i
        );
    }
    for j in 0..table.cols() {
        debug_assert_eq!(
            table.get(0, j),
            0,
            "Contract violation: LcsTable.BaseRow - cell (0, {}) is nonzero",
            j
        );
    }

    for i in 1..table.rows() {
        for j in 1..table.cols() {
            let cell = table.get(i, j);
            debug_assert!(
                cell >= table.get(i - 1, j) && cell >= table.get(i, j - 1),
                "Contract violation: LcsTable.Monotone - cell ({}, {}) = {} below a neighbour",
                i,
                j,
                cell
            );
            debug_assert!(
                cell <= table.get(i - 1, j - 1) + 1,
                "Contract violation: LcsTable.Step - cell ({}, {}) = {} exceeds diagonal + 1",
                i,
                j,
                cell
            );
        }
    }
}

// ============================================================================
// REPORT CONTRACTS
// ============================================================================

/// Check that entry indices ascend and stay within `0..=expected_len`.
///
/// # Panics (debug builds only)
/// Panics on an out-of-range or out-of-order index.
#[inline]
pub fn check_report_ordered<T>(report: &DiffReport<'_, T>, expected_len: usize) {
    let entries = report.entries();
    for (k, entry) in entries.iter().enumerate() {
        debug_assert!(
            entry.index() <= expected_len,
            "Contract violation: DiffReport.InRange - entry {} has index {} > {}",
            k,
            entry.index(),
            expected_len
        );
        if k > 0 {
            debug_assert!(
                entries[k - 1].index() <= entry.index(),
                "Contract violation: DiffReport.Ordered - entry {} index {} < previous {}",
                k,
                entry.index(),
                entries[k - 1].index()
            );
        }
    }
}

/// Check that the report fully explains the difference.
///
/// Inserting the added elements, dropping the removed ones and substituting
/// the changed ones in *expected* must give back *obtained*.
///
/// Added and changed entries point into *obtained*, so a rebuilt element
/// matches when it is the obtained element itself. Elements that aren't equal
/// to themselves (NaN) only ever get there that way.
///
/// # Panics (debug builds only)
/// Panics if the reconstruction differs from `obtained`.
#[inline]
pub fn check_report_reconstructs<T: PartialEq>(
    report: &DiffReport<'_, T>,
    obtained: &[T],
    expected: &[T],
) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_report_ordered(report, expected.len());

    let rebuilt = reconstruct_obtained(report, expected);
    debug_assert!(
        rebuilt.len() == obtained.len()
            && rebuilt
                .iter()
                .zip(obtained)
                .all(|(a, b)| std::ptr::eq(*a, b) || *a == b),
        "Contract violation: DiffReport.Complete - {} entries rebuild {} elements, obtained has {}",
        report.len(),
        rebuilt.len(),
        obtained.len()
    );
}
