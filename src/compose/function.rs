//! Variadic function handles and the combinators built on them.
//!
//! A [`Function<A, R>`] receives its positional arguments as a slice, which
//! makes argument lists first-class: they can be truncated
//! ([`restrict_arity`]), extended at the front ([`partial`]) or replaced by a
//! single previous result ([`pipe`], [`compose`]).
//!
//! # Examples
//!
//! ```rust
//! use pipekit::compose::{Function, binary, partial, pipe};
//!
//! let sum = Function::new(|values: &[i32]| values.iter().sum::<i32>());
//! assert_eq!(binary(sum.clone()).call(&[1, 2, 3, 4]), 3);
//!
//! let add_ten = partial(sum.clone(), [10]);
//! assert_eq!(add_ten.call(&[1, 2]), 13);
//!
//! let double = Function::new(|values: &[i32]| values[0] * 2);
//! let sum_then_double = pipe([sum, double]);
//! assert_eq!(sum_then_double.call(&[1, 2, 3]), Some(12));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::Result;
use crate::number::Numeric;
use crate::validation::{to_count, validate_non_negative};

/// Inline capacity of the argument buffer built by [`partial`].
const PARTIAL_INLINE_ARGUMENTS: usize = 8;

/// A shared, variadic function from a slice of `A` to `R`.
///
/// Cloning a `Function` is cheap: clones share the same body. Handles are
/// reference counted with [`Rc`] and stay on the thread that created them.
pub struct Function<A, R> {
    body: Rc<dyn Fn(&[A]) -> R>,
}

static_assertions::assert_not_impl_any!(Function<i32, i32>: Send, Sync);

impl<A, R> Function<A, R> {
    /// Wraps `body` as a variadic function.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[A]) -> R + 'static,
    {
        Self {
            body: Rc::new(body),
        }
    }

    /// Invokes the function with `arguments`.
    #[inline]
    pub fn call(&self, arguments: &[A]) -> R {
        (self.body)(arguments)
    }

    /// Borrows the function as a closure over exactly one argument.
    ///
    /// The closure fits the element-wise operations of
    /// [`array`](crate::array), which pass each element by reference.
    ///
    /// ```rust
    /// use pipekit::compose::Function;
    ///
    /// let count = Function::new(|values: &[&str]| values.len());
    /// let one_at_a_time = count.as_unary();
    /// assert_eq!(one_at_a_time(&"ignored"), 1);
    /// ```
    pub fn as_unary(&self) -> impl Fn(&A) -> R + '_ {
        move |argument: &A| self.call(std::slice::from_ref(argument))
    }
}

impl<A, R> Clone for Function<A, R> {
    fn clone(&self) -> Self {
        Self {
            body: Rc::clone(&self.body),
        }
    }
}

impl<A, R> fmt::Debug for Function<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Function").finish_non_exhaustive()
    }
}

// =============================================================================
// pipe / compose
// =============================================================================

/// Chains `functions` from left to right.
///
/// The first function receives the caller's arguments; every following one
/// receives the single value returned by its predecessor. An empty chain
/// yields a function that always returns `None`.
///
/// # Examples
///
/// ```rust
/// use pipekit::compose::{Function, pipe};
///
/// let increment = Function::new(|values: &[i32]| values[0] + 1);
/// let double = Function::new(|values: &[i32]| values[0] * 2);
///
/// assert_eq!(pipe([increment, double]).call(&[5]), Some(12));
/// assert_eq!(pipe(Vec::<Function<i32, i32>>::new()).call(&[5]), None);
/// ```
pub fn pipe<A, I>(functions: I) -> Function<A, Option<A>>
where
    A: 'static,
    I: IntoIterator<Item = Function<A, A>>,
{
    let functions: Vec<Function<A, A>> = functions.into_iter().collect();
    let Some((first, rest)) = functions.split_first() else {
        return Function::new(|_: &[A]| None);
    };

    let first = first.clone();
    let rest: Rc<[Function<A, A>]> = rest.into();
    Function::new(move |arguments: &[A]| {
        let seed = first.call(arguments);
        Some(rest.iter().fold(seed, |value, function| {
            function.call(std::slice::from_ref(&value))
        }))
    })
}

/// Chains `functions` from right to left: `pipe` over the reversed list.
///
/// # Examples
///
/// ```rust
/// use pipekit::compose::{Function, compose};
///
/// let increment = Function::new(|values: &[i32]| values[0] + 1);
/// let double = Function::new(|values: &[i32]| values[0] * 2);
///
/// // increment(double(5))
/// assert_eq!(compose([increment, double]).call(&[5]), Some(11));
/// ```
pub fn compose<A, I>(functions: I) -> Function<A, Option<A>>
where
    A: 'static,
    I: IntoIterator<Item = Function<A, A>>,
{
    let mut functions: Vec<Function<A, A>> = functions.into_iter().collect();
    functions.reverse();
    pipe(functions)
}

// =============================================================================
// partial
// =============================================================================

/// Binds `bound` as the leading arguments of `function`.
///
/// The returned function calls `function` with `bound` followed by its own
/// arguments.
pub fn partial<A, R, I>(function: Function<A, R>, bound: I) -> Function<A, R>
where
    A: Clone + 'static,
    R: 'static,
    I: IntoIterator<Item = A>,
{
    let bound: Vec<A> = bound.into_iter().collect();
    Function::new(move |arguments: &[A]| {
        let mut combined: SmallVec<[A; PARTIAL_INLINE_ARGUMENTS]> =
            SmallVec::with_capacity(bound.len() + arguments.len());
        combined.extend(bound.iter().cloned());
        combined.extend(arguments.iter().cloned());
        function.call(&combined)
    })
}

// =============================================================================
// Arity restriction
// =============================================================================

/// A validated argument limit produced by [`restrict_arity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArityRestriction {
    arity: usize,
}

impl ArityRestriction {
    /// Returns the number of arguments forwarded.
    #[inline]
    pub const fn arity(self) -> usize {
        self.arity
    }

    /// Wraps `function` so that it only ever sees the first `arity` arguments.
    pub fn apply<A, R>(self, function: Function<A, R>) -> Function<A, R>
    where
        A: 'static,
        R: 'static,
    {
        let arity = self.arity;
        Function::new(move |arguments: &[A]| {
            function.call(&arguments[..arguments.len().min(arity)])
        })
    }
}

/// Validates `arity` and returns a combinator limiting forwarded arguments.
///
/// Infinity forwards everything; fractions truncate toward zero.
///
/// # Errors
///
/// Returns [`Error::Type`](crate::Error::Type) when `arity` is `NaN` and
/// [`Error::Range`](crate::Error::Range) when it is negative.
///
/// # Examples
///
/// ```rust
/// use pipekit::compose::{Function, restrict_arity};
/// use pipekit::ErrorKind;
///
/// let sum = Function::new(|values: &[i32]| values.iter().sum::<i32>());
/// let first_three = restrict_arity(3).unwrap().apply(sum);
/// assert_eq!(first_three.call(&[1, 2, 3, 4, 5]), 6);
///
/// assert_eq!(restrict_arity(-1).unwrap_err().kind(), ErrorKind::Range);
/// assert_eq!(restrict_arity(f64::NAN).unwrap_err().kind(), ErrorKind::Type);
/// ```
pub fn restrict_arity<N: Numeric>(arity: N) -> Result<ArityRestriction> {
    let arity = validate_non_negative(arity)?;
    Ok(ArityRestriction {
        arity: to_count(arity),
    })
}

/// Forwards no arguments to `function`.
pub fn nullary<A: 'static, R: 'static>(function: Function<A, R>) -> Function<A, R> {
    ArityRestriction { arity: 0 }.apply(function)
}

/// Forwards only the first argument to `function`.
pub fn unary<A: 'static, R: 'static>(function: Function<A, R>) -> Function<A, R> {
    ArityRestriction { arity: 1 }.apply(function)
}

/// Forwards only the first two arguments to `function`.
pub fn binary<A: 'static, R: 'static>(function: Function<A, R>) -> Function<A, R> {
    ArityRestriction { arity: 2 }.apply(function)
}

/// Forwards only the first three arguments to `function`.
pub fn ternary<A: 'static, R: 'static>(function: Function<A, R>) -> Function<A, R> {
    ArityRestriction { arity: 3 }.apply(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn count() -> Function<u8, usize> {
        Function::new(<[u8]>::len)
    }

    #[rstest]
    fn test_nullary_ignores_every_argument() {
        assert_eq!(nullary(count()).call(&[1, 2, 3]), 0);
    }

    #[rstest]
    fn test_restriction_does_not_pad_short_argument_lists() {
        assert_eq!(ternary(count()).call(&[1]), 1);
    }

    #[rstest]
    fn test_fractional_arity_truncates() {
        let restriction = restrict_arity(1.5).unwrap();
        assert_eq!(restriction.arity(), 1);
    }

    #[rstest]
    fn test_infinite_arity_forwards_everything() {
        let everything = restrict_arity(f64::INFINITY).unwrap().apply(count());
        assert_eq!(everything.call(&[0; 40]), 40);
    }

    #[rstest]
    fn test_partial_with_no_bound_arguments_is_transparent() {
        let unbound = partial(count(), Vec::new());
        assert_eq!(unbound.call(&[1, 2]), 2);
    }

    #[rstest]
    fn test_partial_spills_past_inline_capacity() {
        let spilled = partial(count(), vec![0; PARTIAL_INLINE_ARGUMENTS]);
        assert_eq!(spilled.call(&[1, 2, 3]), PARTIAL_INLINE_ARGUMENTS + 3);
    }
}
