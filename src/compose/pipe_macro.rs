//! The `pipe!` macro: push a value through functions, left to right.

/// Applies functions to a value from left to right.
///
/// `pipe!(x, f, g)` evaluates to `g(f(x))`. Every function is called exactly
/// once, so [`FnOnce`] closures are accepted.
///
/// - `pipe!(x)` is `x`
/// - `pipe!(x, f)` is `f(x)`
/// - `pipe!(x, f, g, ...)` keeps feeding each result into the next function
///
/// # Examples
///
/// ```
/// use pipekit::pipe;
/// use pipekit::array::{keep_if, reverse};
///
/// let result = pipe!(
///     vec![1, 2, 3, 4],
///     |values| keep_if(|value: &i32| value % 2 == 0, values),
///     reverse
/// );
/// assert_eq!(result, vec![4, 2]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        assert_eq!(pipe!("unchanged"), "unchanged");
    }

    #[test]
    fn test_pipe_consumes_owned_values() {
        let words = pipe!(
            String::from("b a"),
            |text: String| text.split(' ').map(str::to_owned).collect::<Vec<_>>(),
            |mut words: Vec<String>| {
                words.sort();
                words
            }
        );
        assert_eq!(words, vec!["a", "b"]);
    }
}
