//! Method syntax for the sequence operations.

use std::hash::Hash;

use super::{
    Filtered, Pair, concatenate, deduplicate, deduplicate_hashed, filter, filter_lazy,
    try_filter, zip,
};

/// Extension trait exposing the sequence operations as methods.
///
/// Implemented for `[T]`, so every method is also available on `Vec<T>`,
/// arrays and slices through auto-deref. Each method has exactly the
/// semantics of the free function it delegates to.
///
/// # Examples
///
/// ```rust
/// use seqfn::sequence::{Pair, SequenceOps};
///
/// let numbers = vec![1, 1, 3, 4, 2, 2, 8, 1, 4];
///
/// assert_eq!(numbers.deduplicated(), vec![1, 3, 4, 2, 8]);
/// assert_eq!(numbers.filtered(|n| *n > 3), vec![4, 8, 4]);
/// assert_eq!([1, 2].concatenated_with(&[3]), vec![1, 2, 3]);
/// assert_eq!(
///     [1, 2, 3].zipped_with(&["a", "b"]),
///     vec![Pair::new(1, "a"), Pair::new(2, "b")]
/// );
/// ```
pub trait SequenceOps<T> {
    /// Returns `self` followed by `other`. See [`concatenate`].
    fn concatenated_with(&self, other: &[T]) -> Vec<T>
    where
        T: Clone;

    /// Keeps the first occurrence of each value. See [`deduplicate`].
    fn deduplicated(&self) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Keeps the first occurrence of each value using hashed equality.
    /// See [`deduplicate_hashed`].
    fn deduplicated_hashed(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// Pairs elements with those of `other`. See [`zip`].
    fn zipped_with<U>(&self, other: &[U]) -> Vec<Pair<T, U>>
    where
        T: Clone,
        U: Clone;

    /// Eagerly selects elements satisfying `predicate`. See [`filter`].
    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Eagerly selects elements with a fallible predicate. See [`try_filter`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_filtered<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// Lazily selects elements satisfying `predicate`. See [`filter_lazy`].
    fn filtered_lazy<P>(&self, predicate: P) -> Filtered<'_, T, P>
    where
        P: FnMut(&T) -> bool;
}

impl<T> SequenceOps<T> for [T] {
    #[inline]
    fn concatenated_with(&self, other: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        concatenate(&[self, other])
    }

    #[inline]
    fn deduplicated(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        deduplicate(self)
    }

    #[inline]
    fn deduplicated_hashed(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        deduplicate_hashed(self)
    }

    #[inline]
    fn zipped_with<U>(&self, other: &[U]) -> Vec<Pair<T, U>>
    where
        T: Clone,
        U: Clone,
    {
        zip(self, other)
    }

    #[inline]
    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(self, predicate)
    }

    #[inline]
    fn try_filtered<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        try_filter(self, predicate)
    }

    #[inline]
    fn filtered_lazy<P>(&self, predicate: P) -> Filtered<'_, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        filter_lazy(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_methods_agree_with_free_functions() {
        let numbers = [5, 3, 5, 1, 3, 9];
        let even_index = [0, 2, 4];

        assert_eq!(numbers.deduplicated(), deduplicate(&numbers));
        assert_eq!(numbers.deduplicated_hashed(), deduplicate_hashed(&numbers));
        assert_eq!(numbers.zipped_with(&even_index), zip(&numbers, &even_index));
        assert_eq!(
            numbers.filtered(|n| *n > 2),
            filter(&numbers, |n| *n > 2)
        );
        assert_eq!(
            numbers.concatenated_with(&even_index),
            vec![5, 3, 5, 1, 3, 9, 0, 2, 4]
        );
    }

    #[rstest]
    fn test_filtered_lazy_on_array() {
        let letters = ['a', 'B', 'c', 'D'];
        let upper: String = letters
            .filtered_lazy(|letter| letter.is_ascii_uppercase())
            .collect();
        assert_eq!(upper, "BD");
    }

    #[rstest]
    fn test_try_filtered_propagates_error() {
        let values = [1, 2, 3];
        let result: Result<Vec<i32>, &str> =
            values.try_filtered(|n| if *n == 2 { Err("two") } else { Ok(true) });
        assert_eq!(result, Err("two"));
    }
}
