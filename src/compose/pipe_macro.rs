//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`], since each is called
/// exactly once.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use maybers::pipe;
///
/// let doubled_length = pipe!("hello", str::len, |n: usize| n + n);
/// assert_eq!(doubled_length, 10);
/// ```
///
/// ## Value only
///
/// ```
/// use maybers::pipe;
///
/// assert_eq!(pipe!(42), 42);
/// ```
///
/// ## Threading `Maybe` transformations
///
/// ```
/// use maybers::maybe::Maybe;
/// use maybers::pipe;
///
/// let result = pipe!(
///     Maybe::Just(3),
///     |m: Maybe<i32>| m.map(|n| n * n),
///     |m: Maybe<i32>| m.with_default(0),
/// );
/// assert_eq!(result, 9);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
