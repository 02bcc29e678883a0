//! Error types shared by every module of the crate.
//!
//! Validation failures fall into two kinds:
//!
//! - [`ErrorKind::Type`]: an argument does not have the required type, e.g. a
//!   numeric parameter that is `NaN`.
//! - [`ErrorKind::Range`]: a numeric argument lies outside its allowed domain,
//!   e.g. a negative arity.
//!
//! All failures are raised synchronously by the call that receives the bad
//! argument.
//!
//! # Examples
//!
//! ```rust
//! use pipekit::{Error, ErrorKind};
//!
//! let error = Error::range(-1.0);
//! assert_eq!(error.kind(), ErrorKind::Range);
//! assert_eq!(error.to_string(), "-1 is too small");
//! ```

use std::fmt::Display;

use thiserror::Error;

/// The error type returned by fallible operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was not of the expected kind.
    #[error("{value} is not a {expected}")]
    Type {
        /// Rendering of the rejected argument.
        value: String,
        /// Name of the expected kind, e.g. `"number"`.
        expected: &'static str,
    },

    /// A numeric argument was outside its allowed domain.
    #[error("{value} is too small")]
    Range {
        /// Rendering of the rejected argument.
        value: String,
    },
}

/// Discriminates [`Error`] variants without their payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Type`].
    Type,
    /// See [`Error::Range`].
    Range,
}

impl Error {
    /// Creates an [`Error::Type`] for `value`, which was expected to be an `expected`.
    #[must_use]
    pub fn type_mismatch(value: impl Display, expected: &'static str) -> Self {
        Self::Type {
            value: value.to_string(),
            expected,
        }
    }

    /// Creates an [`Error::Range`] for `value`.
    #[must_use]
    pub fn range(value: impl Display) -> Self {
        Self::Range {
            value: value.to_string(),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Range { .. } => ErrorKind::Range,
        }
    }
}

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_type_mismatch_display() {
        let error = Error::type_mismatch(f64::NAN, "number");
        assert_eq!(error.to_string(), "NaN is not a number");
        assert_eq!(error.kind(), ErrorKind::Type);
    }

    #[rstest]
    fn test_range_display() {
        let error = Error::range(-0.01);
        assert_eq!(error.to_string(), "-0.01 is too small");
        assert_eq!(error.kind(), ErrorKind::Range);
    }
}
