//! The `concatenate!` macro for variadic concatenation.
//!
//! This module provides the [`concatenate!`] macro which joins any number of
//! sequences given as separate arguments.

/// Joins the given sequences end to end into a new `Vec`.
///
/// Each argument may be any value that is `AsRef<[T]>` (arrays, vectors,
/// slices), and the arguments do not need to share a container type. The
/// arguments are borrowed, not consumed.
///
/// # Syntax
///
/// - `concatenate!()` - An empty `Vec`
/// - `concatenate!(a)` - A copy of `a`
/// - `concatenate!(a, b, c, ...)` - `a` followed by `b` followed by `c` ...
///
/// # Examples
///
/// ```
/// use seqfn::concatenate;
///
/// let first = vec![1, 2];
/// let second = [3];
/// let third: &[i32] = &[4, 5];
///
/// assert_eq!(concatenate!(first, second, third), vec![1, 2, 3, 4, 5]);
///
/// // Inputs are only borrowed
/// assert_eq!(first, vec![1, 2]);
///
/// let empty: Vec<i32> = concatenate!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! concatenate {
    // No sequences: empty result
    () => {
        ::std::vec::Vec::new()
    };

    // One or more sequences: borrow each as a slice
    ($($sequence:expr),+ $(,)?) => {
        $crate::sequence::concatenate(&[
            $(::core::convert::AsRef::<[_]>::as_ref(&$sequence)),+
        ])
    };
}
