//! Expression-level shorthand for the sequence operations.
//!
//! This module provides macros that read more naturally than the
//! corresponding function calls when the inputs are written inline:
//!
//! - [`concatenate!`]: Variadic concatenation of any `AsRef<[T]>` values
//! - [`filter!`]: Comprehension-style filtering, eager or lazy
//!
//! Both macros expand to the functions in [`crate::sequence`] and have
//! exactly their semantics.
//!
//! # Examples
//!
//! ## Concatenation of mixed containers
//!
//! ```
//! use seqfn::concatenate;
//!
//! let head = [1, 2];
//! let tail = vec![3, 4, 5];
//! let joined = concatenate!(head, tail, [6]);
//! assert_eq!(joined, vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! ## Filtering
//!
//! ```
//! use seqfn::filter;
//!
//! let colors = vec!["red", "yellow", "black"];
//! let short = filter!(color in colors; if color.len() < 6);
//! assert_eq!(short, vec!["red", "black"]);
//!
//! let numbers = [1, 4, 5, 8, 9, 7, 4];
//! let evens: Vec<i32> = filter!(lazy &n in numbers; if n % 2 == 0).copied().collect();
//! assert_eq!(evens, vec![4, 8, 4]);
//! ```

mod concatenate_macro;
mod filter_macro;

// Re-export macros at module level for documentation
pub use crate::concatenate;
pub use crate::filter;
