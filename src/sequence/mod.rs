//! Functional operations over ordered sequences.
//!
//! This module provides stateless, generic operations over finite,
//! in-memory sequences. Inputs are borrowed slices and are never mutated;
//! every eager operation returns a freshly owned `Vec`.
//!
//! - [`concatenate`]: Join sequences end to end
//! - [`deduplicate`] / [`deduplicate_hashed`]: Keep the first occurrence of each value
//! - [`zip`]: Pair corresponding elements into [`Pair`]s
//! - [`filter`] / [`try_filter`]: Eagerly select elements satisfying a predicate
//! - [`filter_lazy`]: Pull-based selection through the [`Filtered`] iterator
//! - [`materialize`] / [`try_materialize`]: Drain a producer into a `Vec`
//!
//! The [`SequenceOps`] extension trait exposes the same operations as
//! methods on slices, vectors and arrays.
//!
//! # Ordering
//!
//! Every operation preserves the relative order of the elements it keeps.
//! Predicates are invoked once per candidate element, front to back.
//!
//! # Errors
//!
//! No operation defines an error of its own. The `try_` variants accept
//! fallible predicates or producers and hand the first `Err` back to the
//! caller exactly as it was produced.
//!
//! # Examples
//!
//! ```rust
//! use seqfn::sequence::{Pair, concatenate, deduplicate, filter, zip};
//!
//! let joined: Vec<i32> = concatenate(&[vec![1, 1, 3], vec![4, 2, 2], vec![8, 1, 4]]);
//! assert_eq!(joined, vec![1, 1, 3, 4, 2, 2, 8, 1, 4]);
//!
//! assert_eq!(deduplicate(&joined), vec![1, 3, 4, 2, 8]);
//!
//! let pairs = zip(&[1, 2, 3], &[6, 5, 4, 3, 2, 1]);
//! assert_eq!(pairs, vec![Pair::new(1, 6), Pair::new(2, 5), Pair::new(3, 4)]);
//!
//! let short = filter(&["red", "yellow", "black"], |color| color.len() < 6);
//! assert_eq!(short, vec!["red", "black"]);
//! ```

mod concat;
mod dedup;
mod filter;
mod materialize;
mod ops;
mod pair;
mod zip;

pub use concat::concatenate;
pub use dedup::{deduplicate, deduplicate_hashed};
pub use filter::{Filtered, filter, filter_lazy, try_filter};
pub use materialize::{materialize, try_materialize};
pub use ops::SequenceOps;
pub use pair::Pair;
pub use zip::zip;
