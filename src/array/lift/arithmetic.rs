//! Arithmetic lifted to unary functions.
//!
//! Every factory reads its operand with [`ToNumber`] and returns a closure
//! `&V -> f64`. An operand without a numeric reading poisons the closure: it
//! returns `NaN` for every input.
//!
//! Naming follows the position of the stored operand:
//!
//! | factory | result for input `v` |
//! |---|---|
//! | `add(n)` | `v + n` |
//! | `subtract(n)` | `v - n` |
//! | `subtract_from(n)` | `n - v` |
//! | `multiply_by(n)` | `v * n` |
//! | `divide_by(n)` | `v / n` |
//! | `divide(n)` | `n / v` |
//! | `raise_to_power(n)` | `v ^ n` |
//! | `exponentiate(n)` | `n ^ v` |
//! | `modulo(n)` | `v % n` |
//! | `increment()` | `v + 1` |
//! | `decrement()` | `v - 1` |
//! | `reciprocate()` | `1 / v` |

use crate::number::ToNumber;

fn lift<V, O, F>(operand: O, operation: F) -> impl Fn(&V) -> f64
where
    V: ToNumber + ?Sized,
    O: ToNumber,
    F: Fn(f64, f64) -> f64,
{
    let operand = operand.to_number();
    move |value: &V| {
        if operand.is_nan() {
            f64::NAN
        } else {
            operation(value.to_number(), operand)
        }
    }
}

/// Returns `v -> v + operand`.
///
/// ```rust
/// use pipekit::array::{lift::add, transform};
///
/// assert_eq!(transform(add(2), [1, 2]), vec![3.0, 4.0]);
/// assert!(transform(add("two"), [1]).iter().all(|value| value.is_nan()));
/// ```
pub fn add<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| value + operand)
}

/// Returns `v -> v + 1`.
pub fn increment<V: ToNumber + ?Sized>() -> impl Fn(&V) -> f64 {
    add(1)
}

/// Returns `v -> v - operand`.
pub fn subtract<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| value - operand)
}

/// Returns `v -> operand - v`.
pub fn subtract_from<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| operand - value)
}

/// Returns `v -> v - 1`.
pub fn decrement<V: ToNumber + ?Sized>() -> impl Fn(&V) -> f64 {
    subtract(1)
}

/// Returns `v -> v * operand`.
pub fn multiply_by<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| value * operand)
}

/// Returns `v -> v ^ operand`.
pub fn raise_to_power<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, f64::powf)
}

/// Returns `v -> operand ^ v`.
pub fn exponentiate<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| operand.powf(value))
}

/// Returns `v -> operand / v`.
pub fn divide<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| operand / value)
}

/// Returns `v -> v / operand`.
pub fn divide_by<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| value / operand)
}

/// Returns `v -> v % operand`; the result takes the sign of `v`.
pub fn modulo<V: ToNumber + ?Sized>(operand: impl ToNumber) -> impl Fn(&V) -> f64 {
    lift(operand, |value, operand| value % operand)
}

/// Returns `v -> 1 / v`.
pub fn reciprocate<V: ToNumber + ?Sized>() -> impl Fn(&V) -> f64 {
    divide(1)
}
