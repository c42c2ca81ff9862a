// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparison entry points and the `ListEquals` checker.
//!
//! Two ways in, one engine underneath:
//!
//! - [`compare`] takes `&[T]` with `T: PartialEq`. Sequence shape and element
//!   comparability are already guaranteed by the signature, so it can't fail.
//! - [`check_values`] takes dynamically typed [`Value`]s and validates them
//!   first, returning a [`CheckError`] for anything that isn't a pair of lists
//!   of one comparable element type.
//!
//! Both try the O(n) equality pass before building an O(n·m) diff.

use std::fmt;

use crate::diff::generate_diff;
use crate::precheck::{lists_equal, validate};
use crate::types::Comparison;
use crate::value::{ElemType, Value};

/// Which argument of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Obtained,
    Expected,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Obtained => write!(f, "obtained"),
            Side::Expected => write!(f, "expected"),
        }
    }
}

/// Why two values couldn't be compared as lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The value on `Side` isn't a list.
    NotASequence(Side),
    /// Both are lists, but of different element types.
    TypeMismatch {
        obtained: ElemType,
        expected: ElemType,
    },
    /// The shared element type has no equality.
    NotComparable(ElemType),
    /// A checker was handed the wrong number of parameters.
    WrongArity { expected: usize, got: usize },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::NotASequence(side) => write!(f, "{} value is not a slice", side),
            CheckError::TypeMismatch { .. } => write!(f, "element types are not equal"),
            CheckError::NotComparable(_) => write!(f, "element type is not comparable"),
            CheckError::WrongArity { expected, got } => {
                write!(f, "ListEquals expects {} parameters, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for CheckError {}

/// Compare two typed slices.
///
/// ```
/// use listeq::compare;
///
/// let result = compare(&[5, 6], &[3, 4, 5, 6]);
/// assert_eq!(
///     result.diagnostic(),
///     "difference:\n    - at index 0: missing element 3\n    - at index 1: missing element 4"
/// );
/// ```
pub fn compare<'a, T: PartialEq>(obtained: &'a [T], expected: &'a [T]) -> Comparison<'a, T> {
    if lists_equal(obtained, expected) {
        return Comparison::Equal;
    }

    tracing::debug!(
        obtained_len = obtained.len(),
        expected_len = expected.len(),
        "lists differ, computing diff"
    );
    Comparison::Different(generate_diff(obtained, expected))
}

/// Compare two dynamically typed values as lists.
///
/// Validation runs before any comparison work; see [`CheckError`] for the
/// order in which problems are reported.
pub fn check_values<'a>(
    obtained: &'a Value,
    expected: &'a Value,
) -> Result<Comparison<'a, Value>, CheckError> {
    let (obtained, expected) = validate(obtained, expected)?;
    Ok(compare(obtained.items(), expected.items()))
}

/// `(equal, diagnostic)` for two dynamic values.
///
/// The diagnostic is empty on equality, the rendered report when the lists
/// differ, and the validation message when they can't be compared.
pub fn list_equals(obtained: &Value, expected: &Value) -> (bool, String) {
    match check_values(obtained, expected) {
        Ok(comparison) => comparison.into_outcome(),
        Err(err) => (false, err.to_string()),
    }
}

/// Name and parameter names a checker registers under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerInfo {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

/// A predicate an assertion framework can call with untyped parameters.
///
/// `names` are the caller's labels for `params`, in the same order.
pub trait Checker {
    fn info(&self) -> &CheckerInfo;

    fn check(&self, params: &[Value], names: &[&str]) -> (bool, String);
}

/// Verifies two lists are equal, describing the difference when they aren't.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEquals;

static LIST_EQUALS_INFO: CheckerInfo = CheckerInfo {
    name: "ListEquals",
    params: &["obtained", "expected"],
};

/// Shared instance for registration with a test framework.
pub static LIST_EQUALS: ListEquals = ListEquals;

impl Checker for ListEquals {
    fn info(&self) -> &CheckerInfo {
        &LIST_EQUALS_INFO
    }

    fn check(&self, params: &[Value], _names: &[&str]) -> (bool, String) {
        match params {
            [obtained, expected] => list_equals(obtained, expected),
            _ => {
                let err = CheckError::WrongArity {
                    expected: LIST_EQUALS_INFO.params.len(),
                    got: params.len(),
                };
                (false, err.to_string())
            }
        }
    }
}

/// Assert that two slices are equal, panicking with the difference report.
///
/// ```
/// listeq::assert_list_eq!(vec![1, 2, 3], [1, 2, 3]);
/// ```
///
/// ```should_panic
/// listeq::assert_list_eq!(["A", "Z"], ["A", "B"], "case {}", 7);
/// ```
#[macro_export]
macro_rules! assert_list_eq {
    ($obtained:expr, $expected:expr $(,)?) => {
        match (&$obtained, &$expected) {
            (obtained, expected) => {
                let comparison = $crate::compare(&obtained[..], &expected[..]);
                if !comparison.is_equal() {
                    panic!(
                        "assertion `obtained == expected` failed\n{}",
                        comparison.diagnostic()
                    );
                }
            }
        }
    };
    ($obtained:expr, $expected:expr, $($arg:tt)+) => {
        match (&$obtained, &$expected) {
            (obtained, expected) => {
                let comparison = $crate::compare(&obtained[..], &expected[..]);
                if !comparison.is_equal() {
                    panic!(
                        "assertion `obtained == expected` failed: {}\n{}",
                        format_args!($($arg)+),
                        comparison.diagnostic()
                    );
                }
            }
        }
    };
}
