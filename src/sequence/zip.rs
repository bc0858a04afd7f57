//! Element-wise pairing of two sequences.

use super::Pair;
use crate::trace::trace_operation;

/// Pairs up corresponding elements of two sequences.
///
/// The `i`-th pair holds `first[i]` and `second[i]`. The result is as long as
/// the shorter input; elements past that length are discarded without error.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::{Pair, zip};
///
/// let pairs = zip(&[1, 2, 3], &[6, 5, 4, 3, 2, 1]);
/// assert_eq!(pairs, vec![Pair::new(1, 6), Pair::new(2, 5), Pair::new(3, 4)]);
///
/// // Components are addressable by name
/// assert_eq!(pairs[1].first, 2);
/// assert_eq!(pairs[1].second, 5);
/// ```
///
/// Different element types are fine:
///
/// ```rust
/// use seqfn::sequence::zip;
///
/// let labelled = zip(&["a", "b"], &[true, false, true]);
/// assert_eq!(labelled.len(), 2);
/// assert_eq!(labelled[0].into_tuple(), ("a", true));
/// ```
pub fn zip<S, T>(first: &[S], second: &[T]) -> Vec<Pair<S, T>>
where
    S: Clone,
    T: Clone,
{
    let result: Vec<Pair<S, T>> = first
        .iter()
        .zip(second)
        .map(|(left, right)| Pair::new(left.clone(), right.clone()))
        .collect();

    trace_operation!(
        "zip",
        first_length = first.len(),
        second_length = second.len(),
        output_length = result.len()
    );
    result
}
