//! Pair type - the element produced by [`zip`](super::zip).
//!
//! A `Pair<A, B>` holds two values, `first` and `second`, that came from the
//! same position of two sequences. Both fields are public and can be read or
//! destructured by name; conversion to and from `(A, B)` gives positional
//! access.
//!
//! # Examples
//!
//! ```rust
//! use seqfn::sequence::Pair;
//!
//! let pair = Pair::new(1, "one");
//! assert_eq!(pair.first, 1);
//! assert_eq!(pair.second, "one");
//!
//! let (number, name) = pair.into_tuple();
//! assert_eq!((number, name), (1, "one"));
//! ```

use std::fmt;

/// Two values taken from corresponding positions of two sequences.
///
/// # Type Parameters
///
/// * `A` - The type of the value from the first sequence
/// * `B` - The type of the value from the second sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B> {
    /// The value from the first sequence.
    pub first: A,
    /// The value from the second sequence.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from its two components.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Converts the pair into a tuple, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::sequence::Pair;
    ///
    /// assert_eq!(Pair::new('a', 1).into_tuple(), ('a', 1));
    /// ```
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Borrows both components.
    #[inline]
    pub const fn as_borrowed(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    /// Exchanges the two components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqfn::sequence::Pair;
    ///
    /// assert_eq!(Pair::new(1, "x").swap(), Pair::new("x", 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    /// Applies `function` to the first component.
    #[inline]
    pub fn map_first<C, F>(self, function: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Pair {
            first: function(self.first),
            second: self.second,
        }
    }

    /// Applies `function` to the second component.
    #[inline]
    pub fn map_second<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Pair {
            first: self.first,
            second: function(self.second),
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

static_assertions::assert_impl_all!(Pair<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Pair<std::rc::Rc<i32>, i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize, B: serde::Serialize> serde::Serialize for Pair<A, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.first)?;
        tuple.serialize_element(&self.second)?;
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, A, B> serde::Deserialize<'de> for Pair<A, B>
where
    A: serde::Deserialize<'de>,
    B: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (first, second) = <(A, B)>::deserialize(deserializer)?;
        Ok(Self { first, second })
    }
}

// =============================================================================
// Tests
// =============================================================================
