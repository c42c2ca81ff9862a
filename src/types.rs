// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types: diff entries, the report, and the comparison outcome.
//!
//! Every entry borrows from the compared inputs. Indices are positions in
//! *expected*; an `Added` entry at index `k` sits before `expected[k]`.

use std::fmt;

/// One unit of difference between *obtained* and *expected*.
#[derive(Debug, PartialEq)]
pub enum DiffEntry<'a, T> {
    /// `element` is in *obtained* but has no counterpart in *expected* here.
    Added { index: usize, element: &'a T },
    /// `element` is in *expected* but missing from *obtained*.
    Removed { index: usize, element: &'a T },
    /// Aligned position where *obtained* holds `changed` instead of `original`.
    Changed {
        index: usize,
        original: &'a T,
        changed: &'a T,
    },
}

// Manual impls: derives would demand `T: Clone`/`T: Copy` for what are only references.
impl<T> Clone for DiffEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DiffEntry<'_, T> {}

impl<T> DiffEntry<'_, T> {
    pub fn index(&self) -> usize {
        match self {
            DiffEntry::Added { index, .. }
            | DiffEntry::Removed { index, .. }
            | DiffEntry::Changed { index, .. } => *index,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for DiffEntry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Added { index, element } => {
                write!(f, "at index {}: unexpected element {:?}", index, element)
            }
            DiffEntry::Removed { index, element } => {
                write!(f, "at index {}: missing element {:?}", index, element)
            }
            DiffEntry::Changed {
                index,
                original,
                changed,
            } => {
                write!(
                    f,
                    "at index {}: obtained element {:?}, expected {:?}",
                    index, changed, original
                )
            }
        }
    }
}

/// Header line of every rendered report.
pub const REPORT_HEADER: &str = "difference:";

/// Ordered list of differences, ascending by index.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport<'a, T> {
    entries: Vec<DiffEntry<'a, T>>,
}

impl<'a, T> DiffReport<'a, T> {
    pub(crate) fn new(entries: Vec<DiffEntry<'a, T>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DiffEntry<'a, T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Display for DiffReport<'_, T> {
    /// ```text
    /// difference:
    ///     - at index 1: obtained element "Z", expected "B"
    ///     - at index 3: obtained element "Y", expected "D"
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REPORT_HEADER)?;
        for entry in &self.entries {
            write!(f, "\n    - {}", entry)?;
        }
        Ok(())
    }
}

/// Outcome of comparing two valid sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison<'a, T> {
    Equal,
    Different(DiffReport<'a, T>),
}

impl<'a, T> Comparison<'a, T> {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    pub fn report(&self) -> Option<&DiffReport<'a, T>> {
        match self {
            Comparison::Equal => None,
            Comparison::Different(report) => Some(report),
        }
    }
}

impl<T: fmt::Debug> Comparison<'_, T> {
    /// Rendered report, or an empty string when equal.
    pub fn diagnostic(&self) -> String {
        match self {
            Comparison::Equal => String::new(),
            Comparison::Different(report) => report.to_string(),
        }
    }

    /// Flatten into the `(equal, diagnostic)` pair assertion frameworks expect.
    pub fn into_outcome(self) -> (bool, String) {
        (self.is_equal(), self.diagnostic())
    }
}
