//! Table-driven scenarios for the dynamic checker.
//!
//! Each case is a pair of values plus the exact `(equal, diagnostic)` the
//! checker must return.

use super::common::{ints, long_list, strs, LONG_LIST_LEN};
use listeq::{list_equals, ElemType, List, Value};
use std::collections::BTreeMap;

struct Case {
    description: &'static str,
    obtained: Value,
    expected: Value,
    equal: bool,
    message: &'static str,
}

fn opaque_list(name: &'static str, n: usize) -> Value {
    let items = vec![Value::Opaque(name); n];
    Value::List(List::new(ElemType::Opaque(name), items).unwrap())
}

fn map_list() -> Value {
    let mut map = BTreeMap::new();
    map.insert("A".to_string(), Value::from("B"));
    Value::List(List::new(ElemType::Map, vec![Value::Map(map)]).unwrap())
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            description: "both not slices",
            obtained: Value::Map(BTreeMap::new()),
            expected: Value::Map(BTreeMap::new()),
            equal: false,
            message: "expected value is not a slice",
        },
        Case {
            description: "obtained is not a slice",
            obtained: Value::Int(1),
            expected: strs(&[]),
            equal: false,
            message: "obtained value is not a slice",
        },
        Case {
            description: "expected is not a slice",
            obtained: strs(&[]),
            expected: Value::from("foobar"),
            equal: false,
            message: "expected value is not a slice",
        },
        Case {
            description: "same contents but different element type",
            obtained: strs(&["A", "B", "C", "DEF"]),
            expected: Value::any_list(vec!["A".into(), "B".into(), "C".into(), "DEF".into()]),
            equal: false,
            message: "element types are not equal",
        },
        Case {
            description: "different type in last position of untyped lists",
            obtained: Value::any_list(vec!["A".into(), "B".into(), "C".into(), "DEF".into()]),
            expected: Value::any_list(vec!["A".into(), "B".into(), "C".into(), Value::Int(321)]),
            equal: false,
            message: "difference:\n    - at index 3: obtained element \"DEF\", expected 321",
        },
        Case {
            description: "both element types not comparable but different",
            obtained: Value::from(vec![vec!["A"]]),
            expected: opaque_list("func()", 1),
            equal: false,
            message: "element types are not equal",
        },
        Case {
            description: "element type not comparable",
            obtained: map_list(),
            expected: map_list(),
            equal: false,
            message: "element type is not comparable",
        },
        Case {
            description: "opaque element type not comparable",
            obtained: opaque_list("func()", 2),
            expected: opaque_list("func()", 2),
            equal: false,
            message: "element type is not comparable",
        },
        Case {
            description: "containers inside untyped lists are fine",
            obtained: Value::any_list(vec![strs(&["A"])]),
            expected: Value::any_list(vec!["A".into()]),
            equal: false,
            message: "difference:\n    - at index 0: obtained element [\"A\"], expected \"A\"",
        },
        Case {
            description: "empty lists",
            obtained: ints(&[]),
            expected: ints(&[]),
            equal: true,
            message: "",
        },
        Case {
            description: "elements missing at start",
            obtained: ints(&[5, 6]),
            expected: ints(&[3, 4, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 0: missing element 3\n    - at index 1: missing element 4",
        },
        Case {
            description: "elements added at start",
            obtained: ints(&[1, 2, 3, 4, 5, 6]),
            expected: ints(&[3, 4, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 0: unexpected element 1\n    - at index 0: unexpected element 2",
        },
        Case {
            description: "elements missing at end",
            obtained: ints(&[3, 4]),
            expected: ints(&[3, 4, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 2: missing element 5\n    - at index 3: missing element 6",
        },
        Case {
            description: "elements added at end",
            obtained: ints(&[3, 4, 5, 6, 7, 8]),
            expected: ints(&[3, 4, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 4: unexpected element 7\n    - at index 4: unexpected element 8",
        },
        Case {
            description: "elements changed in the middle",
            obtained: strs(&["A", "Z", "C", "Y", "E"]),
            expected: strs(&["A", "B", "C", "D", "E"]),
            equal: false,
            message: "difference:\n    - at index 1: obtained element \"Z\", expected \"B\"\n    - at index 3: obtained element \"Y\", expected \"D\"",
        },
        Case {
            description: "unexpected, changed and missing elements together",
            obtained: ints(&[0, 1, 2, 9, 4, 5]),
            expected: ints(&[1, 2, 3, 4, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 0: unexpected element 0\n    - at index 2: obtained element 9, expected 3\n    - at index 5: missing element 6",
        },
        Case {
            description: "changes between shared elements",
            obtained: ints(&[1, 9, 3, 4, 6]),
            expected: ints(&[1, 2, 3, 5, 6]),
            equal: false,
            message: "difference:\n    - at index 1: obtained element 9, expected 2\n    - at index 3: obtained element 4, expected 5",
        },
        Case {
            description: "super long slice",
            obtained: ints(&long_list(LONG_LIST_LEN)),
            expected: ints(&long_list(LONG_LIST_LEN)),
            equal: true,
            message: "",
        },
    ]
}

#[test]
fn test_checker_scenarios() {
    for case in cases() {
        let (equal, message) = list_equals(&case.obtained, &case.expected);
        assert_eq!(equal, case.equal, "{}: equality", case.description);
        assert_eq!(message, case.message, "{}: diagnostic", case.description);
    }
}

#[test]
fn test_scenarios_are_deterministic() {
    for case in cases() {
        assert_eq!(
            list_equals(&case.obtained, &case.expected),
            list_equals(&case.obtained, &case.expected),
            "{}",
            case.description
        );
    }
}
