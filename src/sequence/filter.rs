//! Predicate-based selection, eager and lazy.
//!
//! - [`filter`] evaluates the predicate on every element up front and returns
//!   the selected elements in a new `Vec`.
//! - [`try_filter`] does the same with a fallible predicate, stopping at the
//!   first error.
//! - [`filter_lazy`] returns a [`Filtered`] iterator that evaluates the
//!   predicate only when the consumer asks for the next element.
//!
//! # Laziness
//!
//! A [`Filtered`] iterator never looks ahead. Each call to `next` examines
//! candidates until one qualifies and returns it immediately; nothing after
//! that candidate has been examined yet. Dropping the iterator part way
//! through is always safe and leaves nothing to clean up.
//!
//! ```rust
//! use seqfn::sequence::filter_lazy;
//!
//! let numbers = [1, 4, 5, 8, 9, 7, 4];
//! let mut examined = Vec::new();
//!
//! let mut evens = filter_lazy(&numbers, |n| {
//!     examined.push(*n);
//!     n % 2 == 0
//! });
//!
//! assert_eq!(evens.next(), Some(&4));
//! drop(evens);
//! assert_eq!(examined, vec![1, 4]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::trace::trace_operation;

/// Selects the elements of `sequence` for which `predicate` returns `true`.
///
/// The predicate is called exactly once per element, front to back, with no
/// short-circuiting. The selected elements keep their relative order.
///
/// # Arguments
///
/// * `sequence` - The elements to select from
/// * `predicate` - Decides whether an element is kept
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::filter;
///
/// let short = filter(&["red", "yellow", "black"], |color| color.len() < 6);
/// assert_eq!(short, vec!["red", "black"]);
///
/// let evens = filter(&[1, 4, 5, 8, 9, 7, 4], |n| n % 2 == 0);
/// assert_eq!(evens, vec![4, 8, 4]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for element in sequence {
        if predicate(element) {
            result.push(element.clone());
        }
    }

    trace_operation!(
        "filter",
        input_length = sequence.len(),
        output_length = result.len()
    );
    result
}

/// Selects elements with a predicate that may fail.
///
/// Behaves like [`filter`] while the predicate returns `Ok`. The first `Err`
/// is returned to the caller as is, and no element after the failing one is
/// examined.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::try_filter;
///
/// let inputs = ["3", "10", "7"];
/// let large: Result<Vec<&str>, std::num::ParseIntError> =
///     try_filter(&inputs, |text| Ok(text.parse::<i32>()? > 5));
/// assert_eq!(large, Ok(vec!["10", "7"]));
///
/// let broken = ["3", "ten", "7"];
/// let result = try_filter(&broken, |text| Ok::<_, std::num::ParseIntError>(text.parse::<i32>()? > 5));
/// assert!(result.is_err());
/// ```
pub fn try_filter<T, E, P>(sequence: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for element in sequence {
        if predicate(element)? {
            result.push(element.clone());
        }
    }

    trace_operation!(
        "try_filter",
        input_length = sequence.len(),
        output_length = result.len()
    );
    Ok(result)
}

/// Creates a lazy, pull-based filter over `sequence`.
///
/// No predicate call happens until the returned iterator is advanced. The
/// iterator borrows `sequence`, so calling `filter_lazy` again on the same
/// input restarts the selection from the beginning.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::{filter_lazy, materialize};
///
/// let numbers = vec![1, 4, 5, 8, 9, 7, 4];
/// let evens = materialize(filter_lazy(&numbers, |n| n % 2 == 0));
/// assert_eq!(evens, vec![&4, &8, &4]);
///
/// // Stop pulling whenever you like
/// let first_two: Vec<i32> = filter_lazy(&numbers, |n| *n > 4).take(2).copied().collect();
/// assert_eq!(first_two, vec![5, 8]);
/// ```
pub fn filter_lazy<T, P>(sequence: &[T], predicate: P) -> Filtered<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    trace_operation!("filter_lazy", input_length = sequence.len());
    Filtered {
        candidates: sequence.iter(),
        predicate,
    }
}

/// The lazy sequence returned by [`filter_lazy`].
///
/// Yields references to the qualifying elements of the borrowed input, in
/// order. The iterator is fused: once it has returned `None` it keeps doing
/// so without calling the predicate again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'a, T, P> {
    candidates: slice::Iter<'a, T>,
    predicate: P,
}

impl<T, P> Filtered<'_, T, P> {
    /// Returns the number of candidates that have not been examined yet.
    ///
    /// This is an upper bound on the number of elements still to come.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::sequence::filter_lazy;
    ///
    /// let mut odds = filter_lazy(&[2, 3, 4, 5], |n| n % 2 == 1);
    /// assert_eq!(odds.remaining(), 4);
    /// assert_eq!(odds.next(), Some(&3));
    /// assert_eq!(odds.remaining(), 2);
    /// ```
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl<'a, T, P> Iterator for Filtered<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.candidates.find(|&element| predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len()))
    }
}

impl<T, P> FusedIterator for Filtered<'_, T, P> where P: FnMut(&T) -> bool {}

impl<T, P: Clone> Clone for Filtered<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            candidates: self.candidates.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Filtered<'_, T, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filtered")
            .field("candidates", &self.candidates.as_slice())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    Filtered<'static, i32, fn(&i32) -> bool>: Send, Sync, Clone, Iterator, FusedIterator
);
static_assertions::assert_not_impl_any!(
    Filtered<'static, std::rc::Rc<i32>, fn(&std::rc::Rc<i32>) -> bool>: Send, Sync
);

// =============================================================================
// Tests
// =============================================================================
