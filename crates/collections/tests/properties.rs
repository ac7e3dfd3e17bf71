//! Property-based tests for the collection operations
//!
//! These tests use proptest to check ordering, short-circuit and
//! dedup invariants across a wide range of inputs.

use lotry_collections::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

/// Small values so that duplicates are common
fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..16, 0..64)
}

/// A non-empty vector and an index inside it
fn arb_values_with_index() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(any::<i32>(), 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len)
    })
}

fn key(x: &i32) -> Result<i32, Infallible> {
    Ok(x.rem_euclid(5))
}

proptest! {
    /// Property: filter keeps the relative order of the kept elements
    #[test]
    fn prop_filter_preserves_order(values in arb_values()) {
        let kept = filter(&values, |x, _| Ok::<_, Infallible>(x % 3 != 0)).unwrap();
        let expected: Vec<i32> = values.iter().copied().filter(|x| x % 3 != 0).collect();
        prop_assert_eq!(kept, expected);
    }

    /// Property: map keeps length and position
    #[test]
    fn prop_map_preserves_positions(values in arb_values()) {
        let mapped = map(&values, |x, i| Ok::<_, Infallible>((*x, i))).unwrap();
        prop_assert_eq!(mapped.len(), values.len());
        for (i, (x, index)) in mapped.into_iter().enumerate() {
            prop_assert_eq!(index, i);
            prop_assert_eq!(x, values[i]);
        }
    }

    /// Property: uniq_by keeps the first occurrence of each key, in order
    #[test]
    fn prop_uniq_by_keeps_first_occurrences(values in arb_values()) {
        let unique = uniq_by(&values, key).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .filter(|x| seen.insert(x.rem_euclid(5)))
            .collect();
        prop_assert_eq!(unique, expected);
    }

    /// Property: drop_while matches skip_while, drop_right_while its mirror
    #[test]
    fn prop_drop_while_matches_std(values in arb_values()) {
        let small = |x: &i32| Ok::<_, Infallible>(*x < 8);

        let rest = drop_while(&values, small).unwrap();
        let expected: Vec<i32> = values.iter().copied().skip_while(|x| *x < 8).collect();
        prop_assert_eq!(rest, expected);

        let head = drop_right_while(&values, small).unwrap();
        let mut expected: Vec<i32> = values.iter().rev().copied().skip_while(|x| *x < 8).collect();
        expected.reverse();
        prop_assert_eq!(head, expected);
    }

    /// Property: a callback failing on the k-th element runs exactly k + 1 times
    #[test]
    fn prop_short_circuit_call_count((values, fail_index) in arb_values_with_index()) {
        let calls = Cell::new(0usize);
        let failing = |_: &i32, index: usize| {
            calls.set(calls.get() + 1);
            if index == fail_index { Err(index) } else { Ok(false) }
        };

        prop_assert_eq!(filter(&values, failing), Err(fail_index));
        prop_assert_eq!(calls.replace(0), fail_index + 1);

        prop_assert_eq!(map(&values, failing), Err(fail_index));
        prop_assert_eq!(calls.replace(0), fail_index + 1);

        // Right-to-left passes reach index k after len - k calls.
        let result = reduce_right(&values, |_, x, i| failing(x, i), false);
        prop_assert_eq!(result, Err(fail_index));
        prop_assert_eq!(calls.replace(0), values.len() - fail_index);
    }

    /// Property: a callback that always fails yields only the error, after one call
    #[test]
    fn prop_failure_returns_no_result(values in arb_values()) {
        prop_assume!(!values.is_empty());
        let calls = Cell::new(0usize);
        let always_fails = |_: &i32| {
            calls.set(calls.get() + 1);
            Err::<i32, _>("failed")
        };

        prop_assert_eq!(group_by(&values, always_fails), Err("failed"));
        prop_assert_eq!(partition_by(&values, always_fails), Err("failed"));
        prop_assert_eq!(find_uniques_by(&values, always_fails), Err("failed"));
        prop_assert_eq!(count_values_by(&values, always_fails), Err("failed"));
        prop_assert_eq!(calls.get(), 4);
    }

    /// Property: an always-true predicate keeps everything in filter and nothing in reject
    #[test]
    fn prop_no_op_predicates(values in arb_values()) {
        let always = |_: &i32, _: usize| Ok::<_, Infallible>(true);
        prop_assert_eq!(filter(&values, always).unwrap(), values.clone());
        prop_assert!(reject(&values, always).unwrap().is_empty());
    }

    /// Property: uniques and duplicates split the distinct keys without overlap
    #[test]
    fn prop_uniques_and_duplicates_are_complementary(values in arb_values()) {
        let uniques = find_uniques_by(&values, key).unwrap();
        let duplicates = find_duplicates_by(&values, key).unwrap();
        let representatives = uniq_by(&values, key).unwrap();

        let mut occurrences: HashMap<i32, usize> = HashMap::new();
        for value in &values {
            *occurrences.entry(value.rem_euclid(5)).or_default() += 1;
        }

        let unique_keys: HashSet<i32> = uniques.iter().map(|x| x.rem_euclid(5)).collect();
        let duplicate_keys: HashSet<i32> = duplicates.iter().map(|x| x.rem_euclid(5)).collect();

        prop_assert!(unique_keys.is_disjoint(&duplicate_keys));
        prop_assert!(uniques.len() + duplicates.len() <= representatives.len());
        prop_assert_eq!(unique_keys.len() + duplicate_keys.len(), occurrences.len());
        prop_assert!(unique_keys.iter().all(|k| occurrences[k] == 1));
        prop_assert!(duplicate_keys.iter().all(|k| occurrences[k] > 1));

        // Duplicates are the first occurrences, so they appear among the representatives in order.
        let first_of_duplicated: Vec<i32> = representatives
            .iter()
            .copied()
            .filter(|x| occurrences[&x.rem_euclid(5)] > 1)
            .collect();
        prop_assert_eq!(duplicates, first_of_duplicated);
    }

    /// Property: partition_by groups concatenate to a permutation of the input,
    /// ordered by first-seen key
    #[test]
    fn prop_partition_by_orders_groups_by_first_seen(values in arb_values()) {
        let groups = partition_by(&values, key).unwrap();

        let group_keys: Vec<i32> = groups.iter().map(|g| g[0].rem_euclid(5)).collect();
        let first_seen: Vec<i32> = uniq_by(&values, key)
            .unwrap()
            .iter()
            .map(|x| x.rem_euclid(5))
            .collect();
        prop_assert_eq!(group_keys, first_seen);
        prop_assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), values.len());
    }
}
