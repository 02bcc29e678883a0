//! Numeric conversions.
//!
//! Two traits describe how values become `f64`:
//!
//! - [`Numeric`] is implemented only for Rust's primitive number types. It is
//!   what counts, arities and rotation offsets accept, so a string can never
//!   be passed where a number is required.
//! - [`ToNumber`] additionally covers strings, which are read with
//!   [`parse_float`]. Comparators and arithmetic lifts use it so that
//!   `"33"` and `33` compare the same way.

/// A primitive number that converts losslessly enough into `f64`.
pub trait Numeric: Copy {
    /// Converts the value into an `f64`.
    fn to_f64(self) -> f64;
}

/// A value that can be read as a floating point number.
///
/// Values with no numeric reading produce `NaN`.
pub trait ToNumber {
    /// Returns the numeric reading of this value.
    fn to_number(&self) -> f64;
}

macro_rules! impl_numeric {
    ($($number:ty),* $(,)?) => {
        $(
            impl Numeric for $number {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl ToNumber for $number {
                #[inline]
                fn to_number(&self) -> f64 {
                    Numeric::to_f64(*self)
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl ToNumber for str {
    fn to_number(&self) -> f64 {
        parse_float(self)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> f64 {
        parse_float(self)
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    #[inline]
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, ToNumber::to_number)
    }
}

/// Reads the longest numeric prefix of `text` as an `f64`.
///
/// Leading whitespace is skipped. An optional sign may precede either a
/// decimal literal (digits, optional fraction, optional exponent) or the word
/// `Infinity`. Text without such a prefix yields `NaN`.
///
/// # Examples
///
/// ```rust
/// use pipekit::number::parse_float;
///
/// assert_eq!(parse_float("121"), 121.0);
/// assert_eq!(parse_float("  3.5kg"), 3.5);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("abc").is_nan());
/// ```
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let length = bytes.len();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_start = end;
    while end < length && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if end < length && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < length && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - fraction_start;
        if mantissa_digits > 0 {
            end = cursor;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < length && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < length && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < length && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
