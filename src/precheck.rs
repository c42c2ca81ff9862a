// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation and the linear-time equality fast path.
//!
//! Naive equality is O(n) while the diff is O(n·m), so every comparison tries
//! the cheap check first and only pays for the table once the inputs are
//! known to differ.

use crate::checker::{CheckError, Side};
use crate::value::{List, Value};

/// Are the two slices equal element by element?
///
/// Short-circuits on a length mismatch and on the first unequal pair.
#[inline]
pub fn lists_equal<T: PartialEq>(obtained: &[T], expected: &[T]) -> bool {
    obtained.len() == expected.len() && obtained.iter().zip(expected).all(|(a, b)| a == b)
}

/// Check that both values are lists of one shared, comparable element type.
///
/// The expected side is inspected first, then the obtained side, then the
/// element types. The first failing check wins.
pub fn validate<'a>(
    obtained: &'a Value,
    expected: &'a Value,
) -> Result<(&'a List, &'a List), CheckError> {
    let expected = expected
        .as_list()
        .ok_or(CheckError::NotASequence(Side::Expected))?;
    let obtained = obtained
        .as_list()
        .ok_or(CheckError::NotASequence(Side::Obtained))?;

    if obtained.elem_type() != expected.elem_type() {
        return Err(CheckError::TypeMismatch {
            obtained: obtained.elem_type().clone(),
            expected: expected.elem_type().clone(),
        });
    }

    if !expected.elem_type().is_comparable() {
        return Err(CheckError::NotComparable(expected.elem_type().clone()));
    }

    Ok((obtained, expected))
}
