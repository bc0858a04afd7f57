//! Draining producers into owned sequences.

use crate::trace::trace_operation;

/// Collects every element a producer yields into a new `Vec`, in yield order.
///
/// Space for the producer's `size_hint` lower bound is reserved up front.
///
/// The producer must be finite: an infinite iterator never lets this
/// function return.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::{filter_lazy, materialize};
///
/// let squares = materialize((1..=4).map(|n| n * n));
/// assert_eq!(squares, vec![1, 4, 9, 16]);
///
/// let evens = materialize(filter_lazy(&[1, 4, 5, 8, 9, 7, 4], |n| n % 2 == 0).copied());
/// assert_eq!(evens, vec![4, 8, 4]);
///
/// let nothing: Vec<u8> = materialize(std::iter::empty());
/// assert!(nothing.is_empty());
/// ```
pub fn materialize<I>(producer: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    let producer = producer.into_iter();
    let (lower_bound, _) = producer.size_hint();

    let mut result = Vec::with_capacity(lower_bound);
    result.extend(producer);

    trace_operation!("materialize", output_length = result.len());
    result
}

/// Collects the values of a producer of `Result`s, stopping at the first error.
///
/// The producer is not advanced past the first `Err`.
///
/// # Errors
///
/// Returns the first `Err` the producer yields, unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::try_materialize;
///
/// let parsed = try_materialize(["1", "2", "3"].iter().map(|text| text.parse::<i32>()));
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failed = try_materialize(["1", "x", "3"].iter().map(|text| text.parse::<i32>()));
/// assert!(failed.is_err());
/// ```
pub fn try_materialize<T, E, I>(producer: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let result: Vec<T> = producer.into_iter().collect::<Result<_, E>>()?;

    trace_operation!("try_materialize", output_length = result.len());
    Ok(result)
}
