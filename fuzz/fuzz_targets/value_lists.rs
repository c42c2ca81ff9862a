// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the dynamic checker.
//!
//! Throws arbitrary shapes at `list_equals`: scalars, typed and untyped lists,
//! nested lists, maps and floats including NaN. It must never panic, and its answer must match the
//! validation rules.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listeq::{list_equals, Value};
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
enum Item {
    Null,
    Bool(bool),
    Int(i8),
    Float(f64),
    Str(u8),
    Nested(Vec<i8>),
}

#[derive(Debug, Arbitrary)]
enum Shape {
    Scalar(Item),
    Map,
    Ints(Vec<i8>),
    Untyped(Vec<Item>),
    Inferred(Vec<Item>),
}

fn item(item: &Item) -> Value {
    match item {
        Item::Null => Value::Null,
        Item::Bool(b) => Value::Bool(*b),
        Item::Int(n) => Value::Int(i64::from(*n)),
        Item::Float(x) => Value::Float(*x),
        Item::Str(c) => Value::Str(format!("s{}", c % 8)),
        Item::Nested(xs) => Value::from(xs.iter().map(|&x| i64::from(x)).collect::<Vec<_>>()),
    }
}

/// NaN anywhere makes a list unequal to itself without being invalid.
fn has_nan(value: &Value) -> bool {
    match value {
        Value::Float(x) => x.is_nan(),
        Value::List(list) => list.items().iter().any(has_nan),
        _ => false,
    }
}

fn build(shape: &Shape) -> Value {
    match shape {
        Shape::Scalar(i) => item(i),
        Shape::Map => Value::Map(BTreeMap::new()),
        Shape::Ints(xs) => Value::from(xs.iter().take(64).map(|&x| i64::from(x)).collect::<Vec<_>>()),
        Shape::Untyped(items) => Value::any_list(items.iter().take(64).map(item).collect()),
        Shape::Inferred(items) => {
            Value::List(listeq::List::infer(items.iter().take(64).map(item).collect()))
        }
    }
}

fuzz_target!(|input: (Shape, Shape)| {
    let obtained = build(&input.0);
    let expected = build(&input.1);

    let (equal, message) = list_equals(&obtained, &expected);

    // INVARIANT 1: non-lists are rejected, expected side first
    if expected.as_list().is_none() {
        assert_eq!(message, "expected value is not a slice");
        return;
    }
    if obtained.as_list().is_none() {
        assert_eq!(message, "obtained value is not a slice");
        return;
    }

    // INVARIANT 2: equal iff the message is empty
    assert_eq!(equal, message.is_empty(), "message: {}", message);

    // INVARIANT 3: a NaN-free list is always equal to itself once it validates
    let (self_equal, self_message) = list_equals(&obtained, &obtained);
    if !self_equal && !has_nan(&obtained) {
        assert_eq!(self_message, "element type is not comparable");
    }

    // INVARIANT 4: a list holding NaN still validates and gets a report
    if has_nan(&obtained) && !self_equal && self_message != "element type is not comparable" {
        assert!(self_message.starts_with("difference:"), "message: {}", self_message);
    }
});
