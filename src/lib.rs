// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! List equality with human-readable difference reports.
//!
//! Checking two lists for equality is O(n). Explaining *how* they differ is a
//! longest-common-subsequence problem, O(n·m). This crate does the cheap check
//! first and only builds the LCS table once the lists are known to differ.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  checker.rs  │────▶│ precheck.rs  │────▶│   diff.rs    │
//! │ (compare,    │     │ (validate,   │     │ (traceback,  │
//! │  ListEquals) │     │  lists_equal)│     │  report)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐                         ┌──────────────┐
//! │   value.rs   │                         │    lcs.rs    │
//! │ (Value, List,│                         │  (LcsTable)  │
//! │  ElemType)   │                         └──────────────┘
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use listeq::{compare, list_equals, Value};
//!
//! // Typed: the signature guarantees both sides are comparable slices.
//! let result = compare(&["A", "Z", "C"], &["A", "B", "C"]);
//! assert_eq!(
//!     result.diagnostic(),
//!     "difference:\n    - at index 1: obtained element \"Z\", expected \"B\""
//! );
//!
//! // Dynamic: shape and element types are checked at runtime.
//! let (equal, message) = list_equals(&Value::Int(1), &Value::from(vec![1i64]));
//! assert!(!equal);
//! assert_eq!(message, "obtained value is not a slice");
//! ```

// Module declarations
mod checker;
pub mod contracts;
mod diff;
mod lcs;
mod precheck;
pub mod testing;
mod types;
mod value;

// Re-exports for public API
pub use checker::{
    check_values, compare, list_equals, CheckError, Checker, CheckerInfo, ListEquals, Side,
    LIST_EQUALS,
};
pub use diff::generate_diff;
pub use lcs::LcsTable;
pub use precheck::{lists_equal, validate};
pub use types::{Comparison, DiffEntry, DiffReport, REPORT_HEADER};
pub use value::{ElemType, List, Typed, Value, ValueError};
