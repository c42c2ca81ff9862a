//! Equality properties: reflexivity, determinism, agreement with the oracle.

use super::common::oracle_equal;
use super::oracles::small_list;
use listeq::{compare, list_equals, Value};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every list equals itself with an empty diagnostic.
    #[test]
    fn prop_reflexive(list in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(compare(&list, &list).into_outcome(), (true, String::new()));
    }

    /// Same for the dynamic path.
    #[test]
    fn prop_reflexive_dynamic(list in prop::collection::vec("[a-z]{0,4}", 0..32)) {
        let value = Value::from(list);
        prop_assert_eq!(list_equals(&value, &value), (true, String::new()));
    }

    /// `equal` is exactly element-wise equality.
    #[test]
    fn prop_matches_oracle(a in small_list(), b in small_list()) {
        prop_assert_eq!(compare(&a, &b).is_equal(), oracle_equal(&a, &b));
    }

    /// Arbitrary bytes, as the fuzzer generates them.
    #[test]
    fn prop_bytes_match_oracle(
        a in prop::collection::vec(any::<u8>(), 0..48),
        b in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        prop_assert_eq!(compare(&a, &b).is_equal(), a == b);
        let (equal, _) = list_equals(&Value::from(a.clone()), &Value::from(b.clone()));
        prop_assert_eq!(equal, a == b);
    }

    /// Unequal lists always produce a non-empty report.
    #[test]
    fn prop_unequal_has_diagnostic(a in small_list(), b in small_list()) {
        let (equal, message) = compare(&a, &b).into_outcome();
        prop_assert_eq!(equal, message.is_empty());
        if !equal {
            prop_assert!(message.starts_with("difference:\n    - at index "));
        }
    }

    /// Repeated calls give identical results.
    #[test]
    fn prop_deterministic(a in small_list(), b in small_list()) {
        prop_assert_eq!(compare(&a, &b).into_outcome(), compare(&a, &b).into_outcome());
    }
}
