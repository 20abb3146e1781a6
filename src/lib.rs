//! # maybers
//!
//! An Elm-flavored algebraic core for Rust: optional values, explained
//! failures, pairs, and left-to-right function pipelines.
//!
//! ## Overview
//!
//! This library provides a small set of immutable algebraic building blocks
//! in the style of the Elm core libraries:
//!
//! - **[`Maybe`](maybe::Maybe)**: a value or its absence, with no explanation
//! - **[`Outcome`](outcome::Outcome)**: a computed value or an explanatory error
//! - **[`Pair`](tuple::Pair)**: a fixed two-slot record with per-slot mapping
//! - **[`pipe!`] / [`compose!`]**: variable-arity left-to-right function chaining
//! - **[`debug::log`]**: a pipeline-friendly tracing helper
//!
//! Every operation is a pure transformation over an in-memory value. Nothing
//! in this crate mutates its input, performs I/O (outside the opt-in `debug`
//! module), or raises for expected failure: "no value" and "failed" are
//! ordinary return values.
//!
//! ## Feature Flags
//!
//! - `maybe`: the optional-value type
//! - `outcome`: the success/failure type (implies `maybe`)
//! - `tuple`: the pair type
//! - `compose`: the `pipe!`/`compose!` macros and combinator helpers
//! - `debug`: the logging passthrough helper (pulls in the `log` facade)
//! - `serde`: `Serialize`/`Deserialize` derives on the data types
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use maybers::maybe::Maybe;
//! use maybers::pipe;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! let result = pipe!(Maybe::Just(8), |m: Maybe<i32>| m.and_then(half));
//! assert_eq!(result, Maybe::Just(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the data types and combinator helpers. The `pipe!` and
/// `compose!` macros live at the crate root and do not need the prelude.
///
/// # Usage
///
/// ```rust
/// use maybers::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::Outcome;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::Pair;

    #[cfg(feature = "compose")]
    pub use crate::compose::{always, identity};

    #[cfg(feature = "debug")]
    pub use crate::debug::log;
}

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "debug")]
pub mod debug;
