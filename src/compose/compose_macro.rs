//! The `compose!` macro: statically typed right-to-left composition.

/// Composes functions from right to left into a single closure.
///
/// `compose!(f, g, h)` builds `|x| f(g(h(x)))`. Unlike
/// [`compose`](crate::compose::compose), which chains [`Function`](crate::compose::Function)
/// handles over one argument type, each step here may change the type as long
/// as adjacent steps agree.
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g)` is `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` nests to the right
///
/// # Examples
///
/// ```
/// use pipekit::compose;
///
/// fn length(text: &str) -> usize { text.len() }
/// fn is_even(value: usize) -> bool { value % 2 == 0 }
///
/// let has_even_length = compose!(is_even, length);
/// assert!(has_even_length("ab"));
/// assert!(!has_even_length("abc"));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}
