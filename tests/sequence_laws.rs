//! Property tests for the sequence operations.
//!
//! Each property holds for every finite input: length and order laws for
//! concatenation and zipping, first-occurrence and idempotence laws for
//! deduplication, and agreement between the eager and lazy filters.

#![cfg(feature = "sequence")]

use proptest::prelude::*;
use seqfn::sequence::{
    concatenate, deduplicate, deduplicate_hashed, filter, filter_lazy, materialize, try_filter,
    zip,
};

proptest! {
    /// concatenate(s1, s2, s3) is s1 followed by s2 followed by s3.
    #[test]
    fn prop_concatenate_is_ordered_append(
        first in prop::collection::vec(any::<i32>(), 0..30),
        second in prop::collection::vec(any::<i32>(), 0..30),
        third in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let result: Vec<i32> = concatenate(&[first.clone(), second.clone(), third.clone()]);

        prop_assert_eq!(result.len(), first.len() + second.len() + third.len());

        let mut expected = first;
        expected.extend(second);
        expected.extend(third);
        prop_assert_eq!(result, expected);
    }

    /// deduplicate leaves no repeated values.
    #[test]
    fn prop_deduplicate_has_no_repeats(
        elements in prop::collection::vec(0u8..16, 0..100)
    ) {
        let result = deduplicate(&elements);
        for (index, value) in result.iter().enumerate() {
            prop_assert!(
                !result[index + 1..].contains(value),
                "Value {} appears more than once", value
            );
        }
    }

    /// deduplicate keeps exactly the first occurrence of each value, in order.
    #[test]
    fn prop_deduplicate_keeps_first_occurrences_in_order(
        elements in prop::collection::vec(0u8..16, 0..100)
    ) {
        let result = deduplicate(&elements);

        let first_occurrences: Vec<u8> = elements
            .iter()
            .enumerate()
            .filter(|(index, value)| elements.iter().position(|other| other == *value) == Some(*index))
            .map(|(_, value)| *value)
            .collect();

        prop_assert_eq!(result, first_occurrences);
    }

    /// deduplicate(deduplicate(s)) == deduplicate(s).
    #[test]
    fn prop_deduplicate_is_idempotent(
        elements in prop::collection::vec(any::<i16>(), 0..100)
    ) {
        let once = deduplicate(&elements);
        prop_assert_eq!(deduplicate(&once), once);
    }

    /// The hashed strategy is observationally identical to the quadratic one.
    #[test]
    fn prop_deduplicate_hashed_equals_deduplicate(
        elements in prop::collection::vec("[a-d]{0,2}", 0..60)
    ) {
        prop_assert_eq!(deduplicate_hashed(&elements), deduplicate(&elements));
    }

    /// zip has the length of the shorter input and pairs matching positions.
    #[test]
    fn prop_zip_pairs_positions_up_to_shorter_length(
        first in prop::collection::vec(any::<i32>(), 0..50),
        second in prop::collection::vec(any::<bool>(), 0..50)
    ) {
        let result = zip(&first, &second);

        prop_assert_eq!(result.len(), first.len().min(second.len()));
        for (index, pair) in result.iter().enumerate() {
            prop_assert_eq!(pair.first, first[index]);
            prop_assert_eq!(pair.second, second[index]);
        }
    }

    /// The eager filter keeps every satisfying element once, in order.
    #[test]
    fn prop_filter_matches_satisfying_subsequence(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        divisor in 1i32..7
    ) {
        let result = filter(&elements, |n| n % divisor == 0);
        let expected: Vec<i32> = elements.iter().copied().filter(|n| n % divisor == 0).collect();
        prop_assert_eq!(result, expected);
    }

    /// Draining the lazy filter gives the eager filter's result.
    #[test]
    fn prop_lazy_filter_drained_equals_eager_filter(
        elements in prop::collection::vec(any::<i64>(), 0..100),
        threshold: i64
    ) {
        let eager = filter(&elements, |n| *n < threshold);
        let lazy: Vec<i64> = materialize(filter_lazy(&elements, |n| *n < threshold).copied());
        prop_assert_eq!(eager, lazy);
    }

    /// The size hint of the lazy filter never undercounts what is left.
    #[test]
    fn prop_lazy_filter_size_hint_is_upper_bound(
        elements in prop::collection::vec(any::<u8>(), 0..60)
    ) {
        let mut iterator = filter_lazy(&elements, |n| n % 3 == 0);
        loop {
            let (_, upper) = iterator.size_hint();
            let remaining_items = iterator.clone().count();
            prop_assert!(upper.is_some_and(|bound| bound >= remaining_items));
            if iterator.next().is_none() {
                break;
            }
        }
    }

    /// A fallible filter whose predicate never fails behaves like filter.
    #[test]
    fn prop_try_filter_all_ok_equals_filter(
        elements in prop::collection::vec(any::<u16>(), 0..100)
    ) {
        let fallible: Result<Vec<u16>, String> = try_filter(&elements, |n| Ok(n % 2 == 1));
        prop_assert_eq!(fallible, Ok(filter(&elements, |n| n % 2 == 1)));
    }

    /// materialize returns exactly the yielded elements.
    #[test]
    fn prop_materialize_is_identity_on_vectors(
        elements in prop::collection::vec(any::<char>(), 0..100)
    ) {
        prop_assert_eq!(materialize(elements.clone()), elements);
    }
}
