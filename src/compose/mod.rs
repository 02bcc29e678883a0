//! Function composition primitives.
//!
//! Two families live here:
//!
//! - **Variadic handles.** [`Function<A, R>`] takes its positional arguments
//!   as a slice. [`pipe`] and [`compose`] chain handles, [`partial`] binds
//!   leading arguments and [`restrict_arity`] (with [`nullary`], [`unary`],
//!   [`binary`], [`ternary`]) truncates argument lists.
//! - **Static composition.** The [`compose!`] and [`pipe!`] macros combine
//!   ordinary closures whose types may change from step to step.
//!
//! # Laws
//!
//! - `pipe([f, g]).call(x) == Some(g(f(x)))`
//! - `compose([f, g]).call(x) == Some(f(g(x)))`
//! - `pipe([]).call(x) == compose([]).call(x) == None`
//! - `restrict_arity(n)?.apply(f).call(xs) == f.call(&xs[..min(n, xs.len())])`
//!
//! # Examples
//!
//! ```
//! use pipekit::compose::{Function, compose, pipe};
//!
//! let add_one = Function::new(|values: &[i32]| values[0] + 1);
//! let double = Function::new(|values: &[i32]| values[0] * 2);
//!
//! assert_eq!(pipe([add_one.clone(), double.clone()]).call(&[5]), Some(12));
//! assert_eq!(compose([add_one, double]).call(&[5]), Some(11));
//! ```

mod compose_macro;
mod function;
mod pipe_macro;
mod utils;

pub use function::{
    ArityRestriction, Function, binary, compose, nullary, partial, pipe, restrict_arity, ternary,
    unary,
};
pub use utils::{constant, flip, identity, not};

// Macros also live at the crate root.
pub use crate::compose;
pub use crate::pipe;
