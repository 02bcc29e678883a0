//! Runtime argument validation.
//!
//! Callability is checked by the compiler through `Fn` bounds, so the
//! runtime layer is about numbers: [`is_number`] rejects `NaN`, and
//! [`validate`] turns any predicate into a guard that returns a typed
//! [`Error`] when the predicate fails.
//!
//! # Examples
//!
//! ```rust
//! use pipekit::validation::{is_number, validate};
//! use pipekit::ErrorKind;
//!
//! let guard = validate(is_number, "number");
//! assert_eq!(guard(3.0), Ok(3.0));
//! assert_eq!(guard(f64::NAN).unwrap_err().kind(), ErrorKind::Type);
//! ```

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::number::Numeric;

/// Returns `true` when `candidate` is a number, i.e. anything but `NaN`.
///
/// Infinities are numbers.
#[inline]
#[must_use]
pub const fn is_number(candidate: f64) -> bool {
    !candidate.is_nan()
}

/// Builds a guard that passes `candidate` through when `predicate` accepts
/// it and fails with [`Error::Type`] naming `entity` otherwise.
pub fn validate<T, P>(predicate: P, entity: &'static str) -> impl Fn(T) -> Result<T>
where
    T: Display + Copy,
    P: Fn(T) -> bool,
{
    move |candidate| {
        if predicate(candidate) {
            Ok(candidate)
        } else {
            Err(Error::type_mismatch(candidate, entity))
        }
    }
}

/// Converts `candidate` to `f64` and checks that it is a number.
///
/// # Errors
///
/// Returns [`Error::Type`] when the value is `NaN`.
pub fn validate_number<N: Numeric>(candidate: N) -> Result<f64> {
    validate(is_number, "number")(candidate.to_f64())
}

/// Checks that `candidate` is a number and not negative.
///
/// # Errors
///
/// Returns [`Error::Type`] for `NaN` and [`Error::Range`] for negative values.
pub fn validate_non_negative<N: Numeric>(candidate: N) -> Result<f64> {
    let number = validate_number(candidate)?;
    if number < 0.0 {
        return Err(Error::range(number));
    }
    Ok(number)
}

/// Converts a validated, non-negative number into a count.
///
/// Fractions truncate toward zero and values beyond `usize::MAX` (including
/// infinity) saturate.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_count(number: f64) -> usize {
    // `as` saturates for out-of-range floats.
    number.max(0.0) as usize
}
