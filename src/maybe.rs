//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<A>` type, which represents a value that
//! is either present (`Just(a)`) or missing (`Nothing`). It communicates
//! *that* a value is missing, never *why* - when the cause of absence
//! matters to the caller, use [`Outcome`](crate::outcome::Outcome) instead.
//!
//! `Maybe` is commonly used for:
//!
//! - Lookups that may find nothing
//! - Parsing steps that may not produce a value
//! - Chaining partial computations without sentinel values
//!
//! # Examples
//!
//! ```rust
//! use maybers::maybe::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got: {}", n),
//!     Maybe::Nothing => println!("Got nothing"),
//! }
//!
//! // Transforming without unwrapping
//! let doubled = absent.map(|n| n * 2);
//! assert_eq!(doubled, Maybe::Nothing);
//! ```

use std::fmt;
use std::hash::Hash;

/// A value that may be absent.
///
/// `Maybe<A>` is either `Just(a)`, holding exactly one value of type `A`,
/// or `Nothing`, holding no value. Exactly one variant is active at a time,
/// and no operation ever mutates an existing `Maybe` - every combinator
/// consumes its input and produces a fresh value.
///
/// # Type Parameters
///
/// * `A` - The type of the value that may be present
///
/// # Examples
///
/// ```rust
/// use maybers::maybe::Maybe;
///
/// let greeting: Maybe<String> = Maybe::Just("hello".to_string());
///
/// // Map over the held value
/// let length = greeting.map(|s| s.len());
/// assert_eq!(length, Maybe::Just(5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum Maybe<A> {
    /// The present variant, holding a value.
    Just(A),
    /// The absent variant, holding no value.
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Variant Predicates
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_just());
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.is_nothing());
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(!present.is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the held value, or the given default if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.with_default(0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.with_default(0), 0);
    /// ```
    #[inline]
    pub fn with_default(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    ///
    /// Useful for inspecting or mapping a held value without consuming
    /// the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Just("hello".to_string());
    /// let length: Maybe<usize> = text.as_ref().map(|s| s.len());
    ///
    /// // `text` is still usable here
    /// assert_eq!(length, Maybe::Just(5));
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the held value if present.
    ///
    /// If this is `Just(a)`, returns `Just(function(a))`.
    /// If this is `Nothing`, returns `Nothing` and the function is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(21);
    /// assert_eq!(present.map(|n| n * 2), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|n| n * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Combines two `Maybe` values with a function.
    ///
    /// The function is invoked only when both inputs are `Just`; otherwise
    /// the result is `Nothing` and the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let first: Maybe<i32> = Maybe::Just(1);
    /// let second: Maybe<i32> = Maybe::Just(2);
    /// assert_eq!(first.map2(second, |a, b| a + b), Maybe::Just(3));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(first.map2(absent, |a, b| a + b), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, second: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, second) {
            (Self::Just(first_value), Maybe::Just(second_value)) => {
                Maybe::Just(function(first_value, second_value))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Combines three `Maybe` values with a function.
    ///
    /// The function is invoked only when all three inputs are `Just`;
    /// otherwise the result is `Nothing` and the function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let a: Maybe<i32> = Maybe::Just(1);
    /// let b: Maybe<i32> = Maybe::Just(2);
    /// let c: Maybe<i32> = Maybe::Just(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Maybe::Just(6));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(a.map3(absent, c, |x, y, z| x + y + z), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(first_value), Maybe::Just(second_value), Maybe::Just(third_value)) => {
                Maybe::Just(function(first_value, second_value, third_value))
            }
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that may itself produce no value.
    ///
    /// If this is `Just(a)`, returns `function(a)` directly. If this is
    /// `Nothing`, returns `Nothing` without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// fn parse_digit(text: &str) -> Maybe<u32> {
    ///     match text.chars().next().and_then(|c| c.to_digit(10)) {
    ///         Some(digit) => Maybe::Just(digit),
    ///         None => Maybe::Nothing,
    ///     }
    /// }
    ///
    /// let parsed = Maybe::Just("7").and_then(parse_digit);
    /// assert_eq!(parsed, Maybe::Just(7));
    ///
    /// let failed = Maybe::Just("x").and_then(parse_digit);
    /// assert_eq!(failed, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(a)` becomes `Just(a)`, and `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Just(42));
    ///
    /// let maybe: Maybe<i32> = None.into();
    /// assert_eq!(maybe, Maybe::Nothing);
    /// ```
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Just(a)` becomes `Some(a)`, and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Just(42).into();
    /// assert_eq!(option, Some(42));
    ///
    /// let option: Option<i32> = Maybe::<i32>::Nothing.into();
    /// assert_eq!(option, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

// Shared values never mutate after construction, so readers on any thread
// are safe whenever the payload itself is.
static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
