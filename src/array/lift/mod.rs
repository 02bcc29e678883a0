//! Factories that lift scalar operations into element-wise functions.
//!
//! - [`arithmetic`]: `add`, `subtract`, `multiply_by`, ... returning `&V -> f64`
//! - [`comparison`]: `equal`, `greater_than`, ... returning `&T -> bool`
//! - [`property`]: `pluck` returning `&P -> Option<P::Value>`
//!
//! All returned closures take their argument by reference, the shape
//! [`transform`](super::transform) and [`keep_if`](super::keep_if) expect.

pub mod arithmetic;
pub mod comparison;
pub mod property;

pub use arithmetic::{
    add, decrement, divide, divide_by, exponentiate, increment, modulo, multiply_by,
    raise_to_power, reciprocate, subtract, subtract_from,
};
pub use comparison::{
    equal, greater_or_equal, greater_than, less_or_equal, less_than, not_equal,
};
pub use property::{Properties, pluck};
