// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for byte-list comparison.
//!
//! Equality must agree with plain `==`, every list must equal itself, and any
//! report must rebuild the obtained list from the expected one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listeq::testing::reconstruct_obtained;
use listeq::{compare, list_equals, Value};

/// Two byte lists, capped so the O(n·m) table stays small.
#[derive(Debug, Arbitrary)]
struct ListPair {
    list1: Vec<u8>,
    list2: Vec<u8>,
}

const MAX_LEN: usize = 256;

fuzz_target!(|input: ListPair| {
    let list1 = &input.list1[..input.list1.len().min(MAX_LEN)];
    let list2 = &input.list2[..input.list2.len().min(MAX_LEN)];

    // INVARIANT 1: every list equals itself with no diagnostic
    let (equal, message) = compare(list1, list1).into_outcome();
    assert!(equal && message.is_empty(), "should equal itself: {:?}", list1);

    // INVARIANT 2: equality agrees with element-wise ==
    let comparison = compare(list1, list2);
    assert_eq!(
        comparison.is_equal(),
        list1 == list2,
        "incorrect equality for\nlist1: {:?}\nlist2: {:?}",
        list1,
        list2
    );

    // INVARIANT 3: the report explains the whole difference
    if let Some(report) = comparison.report() {
        let rebuilt: Vec<u8> = reconstruct_obtained(report, list2)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(rebuilt, list1, "report doesn't rebuild obtained:\n{}", report);
    }

    // INVARIANT 4: the dynamic path agrees with the typed one
    let dynamic = list_equals(&Value::from(list1.to_vec()), &Value::from(list2.to_vec()));
    assert_eq!(dynamic, comparison.into_outcome());
});
