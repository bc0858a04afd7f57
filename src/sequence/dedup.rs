//! First-occurrence deduplication.
//!
//! Two strategies with identical output:
//!
//! - [`deduplicate`] needs only `PartialEq` and compares each candidate
//!   against the values kept so far (quadratic in the worst case).
//! - [`deduplicate_hashed`] needs `Eq + Hash` and tracks seen values in a
//!   hash set (linear expected time). The hasher is selected by the
//!   `fxhash` and `ahash` features.

use std::collections::HashSet;
use std::hash::Hash;

use crate::trace::trace_operation;

#[cfg(feature = "fxhash")]
type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenHasher = std::collections::hash_map::RandomState;

/// Removes repeated values, keeping the first occurrence of each.
///
/// The result lists each distinct value of `sequence` once, in order of
/// first appearance. Every candidate is compared against the values already
/// kept, so the cost is quadratic in the number of distinct values. Use
/// [`deduplicate_hashed`] for large inputs of hashable values.
///
/// Applying the function twice gives the same result as applying it once.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::deduplicate;
///
/// let unique = deduplicate(&[1, 1, 3, 4, 2, 2, 8, 1, 4]);
/// assert_eq!(unique, vec![1, 3, 4, 2, 8]);
///
/// // Only PartialEq is required
/// let floats = deduplicate(&[0.5, 1.5, 0.5]);
/// assert_eq!(floats, vec![0.5, 1.5]);
/// ```
pub fn deduplicate<T>(sequence: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut result: Vec<T> = Vec::new();
    for element in sequence {
        if !result.contains(element) {
            result.push(element.clone());
        }
    }

    trace_operation!(
        "deduplicate",
        input_length = sequence.len(),
        output_length = result.len()
    );
    result
}

/// Removes repeated values using hashed equality.
///
/// Produces exactly the same output as [`deduplicate`] for any type whose
/// `Hash` agrees with its `Eq`, in linear expected time.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::deduplicate_hashed;
///
/// let unique = deduplicate_hashed(&["b", "a", "b", "c", "a"]);
/// assert_eq!(unique, vec!["b", "a", "c"]);
/// ```
pub fn deduplicate_hashed<T>(sequence: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T, SeenHasher> =
        HashSet::with_capacity_and_hasher(sequence.len(), SeenHasher::default());

    let result: Vec<T> = sequence
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect();

    trace_operation!(
        "deduplicate_hashed",
        input_length = sequence.len(),
        output_length = result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[1, 1, 3, 4, 2, 2, 8, 1, 4], &[1, 3, 4, 2, 8])]
    #[case(&[], &[])]
    #[case(&[5], &[5])]
    #[case(&[7, 7, 7, 7], &[7])]
    #[case(&[3, 2, 1], &[3, 2, 1])]
    fn test_deduplicate_keeps_first_occurrences(
        #[case] input: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(deduplicate(input), expected);
    }

    #[rstest]
    #[case(&[1, 1, 3, 4, 2, 2, 8, 1, 4], &[1, 3, 4, 2, 8])]
    #[case(&[], &[])]
    #[case(&[9, 8, 9, 8, 7], &[9, 8, 7])]
    fn test_deduplicate_hashed_keeps_first_occurrences(
        #[case] input: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(deduplicate_hashed(input), expected);
    }

    #[rstest]
    fn test_deduplicate_strings_keeps_first_instance() {
        let input = [
            "alpha".to_string(),
            "beta".to_string(),
            "alpha".to_string(),
        ];
        let result = deduplicate(&input);
        assert_eq!(result, vec!["alpha".to_string(), "beta".to_string()]);
        assert_eq!(input.len(), 3);
    }

    #[rstest]
    fn test_deduplicate_is_idempotent() {
        let input = [4, 4, 1, 3, 1, 4];
        let once = deduplicate(&input);
        let twice = deduplicate(&once);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_deduplicate_hashed_matches_quadratic_strategy() {
        let input: Vec<u32> = (0..200).map(|index| index * 7 % 31).collect();
        assert_eq!(deduplicate_hashed(&input), deduplicate(&input));
    }
}
