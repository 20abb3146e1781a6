//! Helper combinators backing the pipeline macros.

/// Returns the value unchanged.
///
/// The identity function is the unit of chaining: `compose!()` expands to
/// it, and composing with it on either side leaves a function untouched.
///
/// # Examples
///
/// ```
/// use maybers::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// The returned closure clones the captured value on each call.
///
/// # Examples
///
/// ```
/// use maybers::compose::always;
///
/// let answer = always::<_, &str>(42);
/// assert_eq!(answer("ignored"), 42);
/// ```
///
/// Useful for collapsing an error payload to a fixed value:
///
/// ```
/// use maybers::compose::always;
/// use maybers::outcome::Outcome;
///
/// let failure: Outcome<String, i32> = Outcome::Err("details".to_string());
/// assert_eq!(failure.map_error(always(())), Outcome::Err(()));
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
