//! Comprehension-style filtering macro.
//!
//! This module provides the [`filter!`] macro, an expression-level shorthand
//! for [`filter`](crate::sequence::filter) and
//! [`filter_lazy`](crate::sequence::filter_lazy).
//!
//! # Syntax
//!
//! ```text
//! filter!(pattern in sequence; if condition)        // eager, returns Vec<T>
//! filter!(lazy pattern in sequence; if condition)   // lazy, returns Filtered
//! ```
//!
//! `pattern` is matched against a reference to each element, so both
//! `word` (binding `&T`) and `&n` (binding `T` for `Copy` elements) work.

/// Selects the elements of a sequence for which a condition holds.
///
/// The sequence expression is borrowed. In the lazy form the returned
/// iterator borrows it, so the sequence must outlive the iterator.
///
/// # Examples
///
/// ## Eager
///
/// ```
/// use seqfn::filter;
///
/// let words = vec!["red", "yellow", "black"];
/// let short = filter!(word in words; if word.len() < 6);
/// assert_eq!(short, vec!["red", "black"]);
/// ```
///
/// ## Destructuring
///
/// ```
/// use seqfn::filter;
///
/// let scores = vec![("ann", 71), ("bob", 42), ("cy", 90)];
/// let passed = filter!((_, score) in scores; if *score >= 50);
/// assert_eq!(passed, vec![("ann", 71), ("cy", 90)]);
/// ```
///
/// ## Lazy
///
/// ```
/// use seqfn::filter;
/// use seqfn::sequence::materialize;
///
/// let numbers = vec![1, 4, 5, 8, 9, 7, 4];
/// let evens = materialize(filter!(lazy &n in numbers; if n % 2 == 0));
/// assert_eq!(evens, vec![&4, &8, &4]);
/// ```
#[macro_export]
macro_rules! filter {
    // Lazy form: pull-based iterator over the borrowed sequence
    (lazy $pattern:pat in $sequence:expr ; if $condition:expr) => {
        $crate::sequence::filter_lazy(&$sequence, |$pattern| $condition)
    };

    // Eager form: collect the selected elements
    ($pattern:pat in $sequence:expr ; if $condition:expr) => {
        $crate::sequence::filter(&$sequence, |$pattern| $condition)
    };
}
