// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest-common-subsequence table.
//!
//! `table.get(i, j)` is the LCS length of `obtained[..i]` and `expected[..j]`.
//! Row 0 and column 0 are zero: an empty prefix shares nothing with anything.
//! The table is stored flat, row-major, with `expected.len() + 1` columns.

/// Full (n+1)×(m+1) LCS length table.
///
/// The traceback needs random access to every cell, so unlike a distance-only
/// DP this can't be reduced to two rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `obtained` (rows) against `expected` (columns).
    ///
    /// O(n·m) time and space.
    ///
    /// # Panics
    /// Panics if `(n+1)·(m+1)` overflows `usize`. Callers bound input sizes.
    pub fn build<T: PartialEq>(obtained: &[T], expected: &[T]) -> Self {
        let rows = obtained.len() + 1;
        let cols = expected.len() + 1;
        let mut cells = vec![0usize; cell_count(rows, cols)];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if obtained[i - 1] == expected[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// LCS length of `obtained[..i]` and `expected[..j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the LCS of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// `obtained.len() + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `expected.len() + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }
}

fn cell_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols).unwrap_or_else(|| {
        panic!(
            "LCS table of {} x {} cells overflows usize; inputs are too long to diff",
            rows, cols
        )
    })
}
