//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the table-driven code.

use proptest::prelude::*;

/// LCS length by plain recursion with memoization.
///
/// Slower and structured differently from `LcsTable`, which is the point.
pub fn oracle_lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    fn go<T: PartialEq>(a: &[T], b: &[T], memo: &mut Vec<Vec<Option<usize>>>) -> usize {
        let (i, j) = (a.len(), b.len());
        if i == 0 || j == 0 {
            return 0;
        }
        if let Some(v) = memo[i][j] {
            return v;
        }
        let v = if a[i - 1] == b[j - 1] {
            go(&a[..i - 1], &b[..j - 1], memo) + 1
        } else {
            go(&a[..i - 1], b, memo).max(go(a, &b[..j - 1], memo))
        };
        memo[i][j] = Some(v);
        v
    }

    let mut memo = vec![vec![None; b.len() + 1]; a.len() + 1];
    go(a, b, &mut memo)
}

/// Small-alphabet lists, so common subsequences actually occur.
pub fn small_list() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..16)
}

/// Two lists where the second is an edited copy of the first.
pub fn edited_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (
        prop::collection::vec(0u8..8, 0..24),
        prop::collection::vec((0usize..24, 0u8..3, 0u8..8), 0..6),
    )
        .prop_map(|(base, edits)| {
            let mut edited = base.clone();
            for (pos, op, value) in edits {
                let at = if edited.is_empty() { 0 } else { pos % edited.len() };
                match op {
                    0 => edited.insert(at.min(edited.len()), value),
                    1 if !edited.is_empty() => {
                        edited.remove(at);
                    }
                    _ if !edited.is_empty() => edited[at] = value,
                    _ => edited.push(value),
                }
            }
            (edited, base)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The table agrees with the recursive oracle.
    #[test]
    fn diff_lcs_table_len(a in small_list(), b in small_list()) {
        let table = listeq::LcsTable::build(&a, &b);
        prop_assert_eq!(table.lcs_len(), oracle_lcs_len(&a, &b));
    }
}

#[test]
fn test_oracle_lcs_len() {
    assert_eq!(oracle_lcs_len::<u8>(&[], &[]), 0);
    assert_eq!(oracle_lcs_len(&[1, 2, 3], &[1, 2, 3]), 3);
    assert_eq!(oracle_lcs_len(&[1, 3, 5], &[1, 2, 3, 4, 5]), 3);
    assert_eq!(oracle_lcs_len(&[1, 2], &[3, 4]), 0);
}
