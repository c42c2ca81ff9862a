// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and fuzzing.
//!
//! This module is always compiled but hidden from documentation.
//! A report is descriptive, not a patch format; the reconstruction here exists
//! to check reports, and nothing outside tests and contracts should rely on it.

#![doc(hidden)]

use crate::types::{DiffEntry, DiffReport};
use crate::value::Value;

/// Apply `report` to `expected`, returning the sequence it describes.
///
/// Entries are applied in order. Elements of `expected` before an entry's
/// index are copied through; `Added` inserts without consuming, `Removed`
/// skips the element at its index, `Changed` substitutes it.
pub fn reconstruct_obtained<'a, T>(
    report: &DiffReport<'a, T>,
    expected: &'a [T],
) -> Vec<&'a T> {
    let mut rebuilt = Vec::with_capacity(expected.len() + report.len());
    let mut cursor = 0;

    for entry in report.entries() {
        let index = entry.index().min(expected.len());
        if index > cursor {
            rebuilt.extend(expected[cursor..index].iter());
            cursor = index;
        }
        match *entry {
            DiffEntry::Added { element, .. } => rebuilt.push(element),
            DiffEntry::Removed { .. } => cursor = cursor.max(index + 1),
            DiffEntry::Changed { changed, .. } => {
                rebuilt.push(changed);
                cursor = cursor.max(index + 1);
            }
        }
    }

    if cursor < expected.len() {
        rebuilt.extend(expected[cursor..].iter());
    }
    rebuilt
}

/// Element-wise equality without any of the crate's machinery.
pub fn oracle_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}

/// Integer list value, e.g. `ints(&[3, 4, 5])`.
pub fn ints(items: &[i64]) -> Value {
    Value::from(items.to_vec())
}

/// String list value, e.g. `strs(&["A", "B"])`.
pub fn strs(items: &[&str]) -> Value {
    Value::from(items.to_vec())
}
