//! Outcome type - a computed value or an explanatory error.
//!
//! This module provides the `Outcome<E, A>` type, which represents either a
//! successful value (`Ok(a)`) or a failure carrying an explanatory payload
//! (`Err(e)`). The error payload can be any type, not just a string.
//!
//! `Outcome` is the "explained failure" counterpart to
//! [`Maybe`](crate::maybe::Maybe): use `Maybe` when the cause of absence is
//! irrelevant to the caller, and `Outcome` when downstream logic or
//! reporting needs to know *why* something failed. The two convert into each
//! other with [`Outcome::to_maybe`] and [`Outcome::from_maybe`].
//!
//! The type is named `Outcome` rather than `Result` so it can be used
//! alongside the standard prelude without shadowing; `From` conversions to
//! and from [`std::result::Result`] are provided.
//!
//! # Examples
//!
//! ```rust
//! use maybers::outcome::Outcome;
//!
//! fn parse_age(text: &str) -> Outcome<String, u8> {
//!     match text.parse::<u8>() {
//!         Ok(age) => Outcome::Ok(age),
//!         Err(_) => Outcome::Err(format!("not an age: {text:?}")),
//!     }
//! }
//!
//! assert_eq!(parse_age("42"), Outcome::Ok(42));
//! assert!(parse_age("forty-two").is_err());
//! ```

use std::fmt;
use std::hash::Hash;

use crate::maybe::Maybe;

/// A computed value or an explanatory error.
///
/// `Outcome<E, A>` is either `Ok(a)`, a successful value of type `A`, or
/// `Err(e)`, a failure carrying a payload of type `E`. Exactly one variant
/// is active at a time, and every combinator consumes its input and
/// produces a fresh value - nothing is ever mutated in place.
///
/// No operation on this type panics; failure is always represented by the
/// `Err` variant, never by raising. If a caller-supplied closure panics,
/// that panic propagates to the caller unmodified.
///
/// # Type Parameters
///
/// * `E` - The type of the error payload
/// * `A` - The type of the successful value
///
/// # Examples
///
/// ```rust
/// use maybers::outcome::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::Ok(42);
/// let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());
///
/// assert_eq!(success.map(|n| n * 2), Outcome::Ok(84));
/// assert_eq!(failure.with_default(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum Outcome<E, A> {
    /// The successful variant, holding the computed value.
    Ok(A),
    /// The failed variant, holding the explanatory payload.
    Err(E),
}

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Variant Predicates
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert!(success.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the successful value, or the given default if this is `Err`.
    ///
    /// The error payload is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(42);
    /// assert_eq!(success.with_default(0), 42);
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());
    /// assert_eq!(failure.with_default(0), 0);
    /// ```
    #[inline]
    pub fn with_default(self, default: A) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Converts from `&Outcome<E, A>` to `Outcome<&E, &A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let report: Outcome<String, String> = Outcome::Ok("done".to_string());
    /// let length = report.as_ref().map(|s| s.len());
    ///
    /// assert_eq!(length, Outcome::Ok(4));
    /// assert!(report.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the successful value.
    ///
    /// If this is `Ok(a)`, returns `Ok(function(a))`. An `Err` passes
    /// through unchanged and the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(21);
    /// assert_eq!(success.map(|n| n * 2), Outcome::Ok(42));
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Outcome::Err("broken".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Combines two `Outcome` values with a function.
    ///
    /// The function is invoked only when both inputs are `Ok`. Otherwise
    /// the result is the **first** `Err` in left-to-right order: if `self`
    /// is `Err` it is returned, else the second operand's `Err` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let first: Outcome<String, i32> = Outcome::Ok(1);
    /// let second: Outcome<String, i32> = Outcome::Ok(2);
    /// assert_eq!(first.map2(second, |a, b| a + b), Outcome::Ok(3));
    ///
    /// let early: Outcome<String, i32> = Outcome::Err("first".to_string());
    /// let late: Outcome<String, i32> = Outcome::Err("second".to_string());
    /// assert_eq!(
    ///     early.map2(late, |a, b| a + b),
    ///     Outcome::Err("first".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, second: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, second) {
            (Self::Ok(first_value), Outcome::Ok(second_value)) => {
                Outcome::Ok(function(first_value, second_value))
            }
            (Self::Err(error), _) => Outcome::Err(error),
            (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    /// Combines three `Outcome` values with a function.
    ///
    /// The function is invoked only when all three inputs are `Ok`.
    /// Otherwise the result is the first `Err` checked in the order
    /// `self`, `second`, `third`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let a: Outcome<String, i32> = Outcome::Ok(1);
    /// let b: Outcome<String, i32> = Outcome::Ok(2);
    /// let c: Outcome<String, i32> = Outcome::Ok(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Outcome::Ok(6));
    /// ```
    #[inline]
    pub fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(first_value), Outcome::Ok(second_value), Outcome::Ok(third_value)) => {
                Outcome::Ok(function(first_value, second_value, third_value))
            }
            (Self::Err(error), _, _) => Outcome::Err(error),
            (_, Outcome::Err(error), _) => Outcome::Err(error),
            (_, _, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error payload.
    ///
    /// If this is `Err(e)`, returns `Err(function(e))`. An `Ok` passes
    /// through unchanged and the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err(404);
    /// let described = failure.map_error(|code| format!("http {code}"));
    /// assert_eq!(described, Outcome::Err("http 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<F2, G>(self, function: G) -> Outcome<F2, A>
    where
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// If this is `Ok(a)`, returns `function(a)` directly. An `Err`
    /// short-circuits without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// fn reciprocal(n: f64) -> Outcome<String, f64> {
    ///     if n == 0.0 {
    ///         Outcome::Err("division by zero".to_string())
    ///     } else {
    ///         Outcome::Ok(1.0 / n)
    ///     }
    /// }
    ///
    /// let chained = Outcome::Ok(4.0).and_then(reciprocal);
    /// assert_eq!(chained, Outcome::Ok(0.25));
    ///
    /// let failed = Outcome::Ok(0.0).and_then(reciprocal);
    /// assert!(failed.is_err());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Maybe Conversions
    // =========================================================================

    /// Projects the successful value into a [`Maybe`], discarding the error.
    ///
    /// `Ok(a)` becomes `Just(a)`, and `Err(_)` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    /// use maybers::outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok(5);
    /// assert_eq!(success.to_maybe(), Maybe::Just(5));
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("gone".to_string());
    /// assert_eq!(failure.to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Ok(value) => Maybe::Just(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    /// Builds an `Outcome` from a [`Maybe`], supplying the error to use for
    /// `Nothing`.
    ///
    /// `Just(a)` becomes `Ok(a)`, and `Nothing` becomes `Err(error)`. This
    /// is the inverse of [`Outcome::to_maybe`] given a default error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::maybe::Maybe;
    /// use maybers::outcome::Outcome;
    ///
    /// let present = Outcome::from_maybe("missing", Maybe::Just(5));
    /// assert_eq!(present, Outcome::Ok(5));
    ///
    /// let absent = Outcome::from_maybe("missing", Maybe::<i32>::Nothing);
    /// assert_eq!(absent, Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn from_maybe(error: E, maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Self::Ok(value),
            Maybe::Nothing => Self::Err(error),
        }
    }
}

// =============================================================================
// Homogeneous Payloads
// =============================================================================

impl<A> Outcome<A, A> {
    /// Returns whichever payload is present.
    ///
    /// Only available when the error and value types coincide; the
    /// constraint is enforced structurally, so calling this on an
    /// `Outcome` with differing payload types does not compile:
    ///
    /// ```compile_fail
    /// use maybers::outcome::Outcome;
    ///
    /// let mismatched: Outcome<String, i32> = Outcome::Ok(42);
    /// mismatched.either();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let success: Outcome<&str, &str> = Outcome::Ok("hi");
    /// assert_eq!(success.either(), "hi");
    ///
    /// let failure: Outcome<&str, &str> = Outcome::Err("oops");
    /// assert_eq!(failure.either(), "oops");
    /// ```
    #[inline]
    pub fn either(self) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => error,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Outcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    /// Converts a standard `Result` to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<String, i32> = ok.into();
    /// assert_eq!(outcome, Outcome::Ok(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    /// Converts an `Outcome` to a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::outcome::Outcome;
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err("broken".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("broken".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync);
