//! Concatenation of sequences.

use crate::trace::trace_operation;

/// Joins any number of sequences end to end.
///
/// The result contains every element of every input: the inputs in the order
/// they are given, each input in its own order. Its length is the sum of the
/// input lengths, and the output buffer is allocated once with that size.
///
/// Any type that is `AsRef<[T]>` can be passed as an input: vectors, arrays,
/// or slices. To join inputs of different container types, use the
/// [`concatenate!`](crate::concatenate!) macro.
///
/// # Arguments
///
/// * `sequences` - The sequences to join, in output order
///
/// # Returns
///
/// A new `Vec` holding clones of all input elements. An empty list of inputs
/// yields an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::concatenate;
///
/// let joined: Vec<i32> = concatenate(&[vec![1, 2], vec![], vec![3, 4, 5]]);
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
///
/// let words: Vec<&str> = concatenate(&[["a", "b"], ["c", "d"]]);
/// assert_eq!(words, vec!["a", "b", "c", "d"]);
///
/// let none: Vec<i32> = concatenate::<i32, Vec<i32>>(&[]);
/// assert!(none.is_empty());
/// ```
pub fn concatenate<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total_length: usize = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .sum();

    let mut result = Vec::with_capacity(total_length);
    for sequence in sequences {
        result.extend_from_slice(sequence.as_ref());
    }

    trace_operation!(
        "concatenate",
        inputs = sequences.len(),
        output_length = result.len()
    );
    result
}
