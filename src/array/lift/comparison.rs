//! Comparisons lifted to unary predicates.
//!
//! Each factory stores a value and returns `&T -> bool`, which suits both
//! [`keep_if`](crate::array::keep_if) and, for a boolean sequence,
//! [`transform`](crate::array::transform).
//!
//! ```rust
//! use pipekit::array::lift::{greater_than, less_or_equal};
//! use pipekit::array::{keep_if, transform};
//!
//! assert_eq!(keep_if(greater_than(2), [1, 2, 3, 4]), vec![3, 4]);
//! assert_eq!(transform(less_or_equal(2), [1, 2, 3]), vec![true, true, false]);
//! ```

/// Returns `v -> v == expected`.
pub fn equal<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value == expected
}

/// Returns `v -> v != expected`.
pub fn not_equal<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value != expected
}

/// Returns `v -> v > bound`.
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value > bound
}

/// Returns `v -> v >= bound`.
pub fn greater_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value >= bound
}

/// Returns `v -> v < bound`.
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value < bound
}

/// Returns `v -> v <= bound`.
pub fn less_or_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value <= bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_on_owned_strings() {
        let is_apple = equal(String::from("apple"));
        assert!(is_apple(&String::from("apple")));
        assert!(not_equal(String::from("apple"))(&String::from("pear")));
    }

    #[test]
    fn test_nan_fails_every_ordering() {
        let value = f64::NAN;
        assert!(!greater_than(0.0)(&value));
        assert!(!greater_or_equal(0.0)(&value));
        assert!(!less_than(0.0)(&value));
        assert!(!less_or_equal(0.0)(&value));
    }
}
