//! Pipeline-friendly debug logging.
//!
//! The single helper here, [`log`], emits a labelled value through the
//! [`log`](https://docs.rs/log) facade and hands the value straight back, so
//! it can be dropped into the middle of a transformation chain without
//! restructuring it. The library never installs a logger; whether anything
//! is printed is up to the embedding application.

use std::fmt;

/// Logs a message alongside a value, then returns the value unchanged.
///
/// The value is rendered with its [`Debug`](std::fmt::Debug) implementation
/// at `debug` level. Apart from the log record, this is the identity
/// function.
///
/// # Examples
///
/// ```rust
/// use maybers::debug;
/// use maybers::pipe;
///
/// let result = pipe!(
///     21,
///     |n: i32| n * 2,
///     |n: i32| debug::log("after doubling", n),
///     |n: i32| n + 1,
/// );
/// assert_eq!(result, 43);
/// ```
#[inline]
pub fn log<A: fmt::Debug>(message: &str, value: A) -> A {
    log::debug!("{message}: {value:?}");
    value
}
