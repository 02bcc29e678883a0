//! Small combinators used on their own and inside the operation library.
//!
//! - [`identity`]: returns its argument.
//! - [`constant`]: ignores its argument and returns a fixed value.
//! - [`not`]: boolean negation as a function, handy for building complements
//!   of predicates.
//! - [`flip`]: swaps the arguments of a two-argument function.

/// Returns `value` unchanged.
///
/// ```
/// use pipekit::compose::identity;
/// use pipekit::array::transform;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(transform(|value: &i32| identity(*value), &values), values);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that returns a clone of `value` whatever it receives.
///
/// ```
/// use pipekit::compose::constant;
///
/// let always_none = constant::<Option<i32>, &str>(None);
/// assert_eq!(always_none("ignored"), None);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_ignored| value.clone()
}

/// Negates `value`.
#[inline]
#[must_use]
pub const fn not(value: bool) -> bool {
    !value
}

/// Swaps the two arguments of `function`.
///
/// ```
/// use pipekit::compose::flip;
///
/// let power_of = flip(i32::pow);
/// assert_eq!(power_of(3, 2), 8);
/// ```
pub fn flip<A, B, R, F>(function: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_moves_owned_values() {
        let owned = String::from("owned");
        assert_eq!(identity(owned), "owned");
    }

    #[test]
    fn test_constant_can_be_reused() {
        let always_seven = constant(7_u8);
        assert!((0..10).map(&always_seven).all(|value| value == 7));
    }

    #[test]
    fn test_flip_swaps_arguments() {
        let minus = |left: i32, right: i32| left - right;
        assert_eq!(flip(minus)(1, 10), 9);
    }

    #[test]
    fn test_not() {
        assert!(not(false));
        assert!(!not(true));
    }
}
