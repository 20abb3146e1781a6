//! Left-to-right function chaining.
//!
//! This module provides the two pipeline builders of the library, both of
//! which read in **application order** - the first function named is the
//! first one applied:
//!
//! - [`pipe!`]: push a starting value through a sequence of functions
//! - [`compose!`]: build one new unary function from a sequence of functions
//!
//! along with the helper combinators they rest on:
//!
//! - [`identity`]: returns its argument unchanged
//! - [`always`]: a function that ignores its input and returns a fixed value
//!
//! # Examples
//!
//! ## Pipeline (apply now)
//!
//! ```
//! use maybers::pipe;
//!
//! let doubled_length = pipe!("hello", str::len, |n: usize| n + n);
//! assert_eq!(doubled_length, 10);
//! ```
//!
//! ## Composition (apply later)
//!
//! ```
//! use maybers::compose;
//!
//! let doubled_length = compose!(str::len, |n: usize| n + n);
//! assert_eq!(doubled_length("hello"), 10);
//! ```
//!
//! # Relationship
//!
//! `pipe!(x, f, g)` and `compose!(f, g)(x)` produce the same value; the
//! former applies immediately, the latter builds a reusable closure. With
//! an empty function list both degrade to identity: `pipe!(x)` is `x` and
//! `compose!()` is [`identity`].
//!
//! # Laws
//!
//! - **Associativity**: `pipe!(x, f, g, h) == pipe!(pipe!(x, f, g), h)`
//! - **Left Identity**: `compose!(identity, f)(x) == f(x)`
//! - **Right Identity**: `compose!(f, identity)(x) == f(x)`

mod compose_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{always, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
