//! # seqfn
//!
//! Functional-style operations over ordered, finite, in-memory sequences.
//!
//! ## Overview
//!
//! Every operation takes its inputs by reference, leaves them untouched,
//! and returns a freshly owned result:
//!
//! - **Concatenation**: join any number of sequences in order
//! - **Deduplication**: keep the first occurrence of each value
//! - **Zipping**: pair up corresponding elements, truncating to the shorter input
//! - **Filtering**: eager (`Vec`) or lazy (pull-based iterator)
//! - **Materialization**: drain any producer into a `Vec`
//! - **Shorthand macros**: `concatenate!` and `filter!`
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence operations, [`Pair`](sequence::Pair) and
//!   [`Filtered`](sequence::Filtered)
//! - `compose`: `concatenate!` and `filter!` macros
//! - `serde`: `Serialize`/`Deserialize` for [`Pair`](sequence::Pair)
//! - `fxhash` / `ahash`: hasher used by
//!   [`deduplicate_hashed`](sequence::deduplicate_hashed)
//! - `tracing`: trace-level events at operation boundaries
//! - `full`: Enable all features except hasher selection
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "sequence")]
//! # fn main() {
//! use seqfn::prelude::*;
//!
//! let numbers = vec![1, 4, 5, 8, 9, 7, 4];
//!
//! let evens = materialize(filter_lazy(&numbers, |n| n % 2 == 0).copied());
//! assert_eq!(evens, vec![4, 8, 4]);
//!
//! assert_eq!(numbers.deduplicated(), vec![1, 4, 5, 8, 9, 7]);
//! # }
//! # #[cfg(not(feature = "sequence"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use seqfn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "sequence")]
mod trace;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;
