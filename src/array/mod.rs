//! Pure sequence operations.
//!
//! Every function takes its sequence argument last, coerces it with
//! [`to_sequence`] and returns a new `Vec`. Inputs are never modified:
//! borrowed sequences are copied, owned ones are consumed.
//!
//! | Operation | Result |
//! |---|---|
//! | [`transform`] | each element mapped |
//! | [`keep_if`] / [`remove_if`] | elements passing / failing a predicate |
//! | [`remove_first`] / [`remove_last`] | `n` elements dropped from the front / back |
//! | [`prepend`] / [`append`] | another sequence joined before / after |
//! | [`merge_with`] | two sequences combined position by position |
//! | [`reverse`] | order reversed |
//! | [`sort`] | stable order by a comparator |
//! | [`shuffle()`] | uniformly permuted |
//! | [`rotate`] | elements moved cyclically |
//! | [`unique`] | duplicates removed, first occurrence kept |
//!
//! # Examples
//!
//! ```rust
//! use pipekit::array::{keep_if, rotate, transform};
//! use pipekit::array::lift::{greater_than, multiply_by};
//!
//! let doubled = transform(multiply_by(2), [1, 2, 3]);
//! assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
//!
//! let large = keep_if(greater_than(3.0), &doubled);
//! assert_eq!(large, vec![4.0, 6.0]);
//!
//! assert_eq!(rotate(1, large).unwrap(), vec![6.0, 4.0]);
//! ```

pub mod lift;
pub mod shuffle;
pub mod sorts;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use crate::compose::not;
use crate::error::Result;
use crate::number::Numeric;
use crate::sequence::{IntoSequence, to_sequence};
use crate::validation::{to_count, validate_number};

pub use shuffle::{Shuffler, shuffler};
pub use sorts::{lexical, numeric_ascending};

#[cfg(feature = "fxhash")]
type DistinctHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type DistinctHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type DistinctHasher = std::collections::hash_map::RandomState;

// =============================================================================
// Mapping and filtering
// =============================================================================

/// Maps every element through `function`.
pub fn transform<S, F, U>(function: F, sequence: S) -> Vec<U>
where
    S: IntoSequence,
    F: FnMut(&S::Item) -> U,
{
    to_sequence(sequence).iter().map(function).collect()
}

/// Keeps the elements for which `predicate` returns `true`.
pub fn keep_if<S, P>(predicate: P, sequence: S) -> Vec<S::Item>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut kept = to_sequence(sequence);
    kept.retain(predicate);
    kept
}

/// Keeps the elements for which `predicate` returns `false`.
pub fn remove_if<S, P>(mut predicate: P, sequence: S) -> Vec<S::Item>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    keep_if(|element: &S::Item| not(predicate(element)), sequence)
}

// =============================================================================
// Structural edits
// =============================================================================

/// Drops the first `count` elements.
///
/// A count of zero or less returns a copy; a count of at least the length
/// returns an empty sequence. Fractions truncate toward zero.
///
/// # Errors
///
/// Returns [`Error::Type`](crate::Error::Type) when `count` is `NaN`.
pub fn remove_first<N, S>(count: N, sequence: S) -> Result<Vec<S::Item>>
where
    N: Numeric,
    S: IntoSequence,
{
    let count = validate_number(count)?;
    let mut remaining = to_sequence(sequence);
    let removed = to_count(count).min(remaining.len());
    remaining.drain(..removed);
    Ok(remaining)
}

/// Drops the last `count` elements.
///
/// Counts behave as in [`remove_first`].
///
/// # Errors
///
/// Returns [`Error::Type`](crate::Error::Type) when `count` is `NaN`.
pub fn remove_last<N, S>(count: N, sequence: S) -> Result<Vec<S::Item>>
where
    N: Numeric,
    S: IntoSequence,
{
    let count = validate_number(count)?;
    let mut remaining = to_sequence(sequence);
    let removed = to_count(count).min(remaining.len());
    remaining.truncate(remaining.len() - removed);
    Ok(remaining)
}

/// Places the elements of `other` before those of `sequence`.
pub fn prepend<O, S>(other: O, sequence: S) -> Vec<S::Item>
where
    O: IntoSequence<Item = S::Item>,
    S: IntoSequence,
{
    let mut joined = to_sequence(other);
    joined.extend(to_sequence(sequence));
    joined
}

/// Places the elements of `other` after those of `sequence`.
pub fn append<O, S>(other: O, sequence: S) -> Vec<S::Item>
where
    O: IntoSequence<Item = S::Item>,
    S: IntoSequence,
{
    let mut joined = to_sequence(sequence);
    joined.extend(to_sequence(other));
    joined
}

/// Combines `sequence` and `other` position by position.
///
/// The result is as long as the longer input. Where one side has run out,
/// `function` receives `None` for it, together with the position.
///
/// ```rust
/// use pipekit::array::merge_with;
///
/// let sums = merge_with(
///     |left: Option<&i32>, right: Option<&i32>, _index| {
///         left.copied().unwrap_or(0) + right.copied().unwrap_or(0)
///     },
///     [10, 20],
///     [1, 2, 3],
/// );
/// assert_eq!(sums, vec![11, 22, 3]);
/// ```
pub fn merge_with<F, O, S, R>(mut function: F, other: O, sequence: S) -> Vec<R>
where
    F: FnMut(Option<&S::Item>, Option<&O::Item>, usize) -> R,
    O: IntoSequence,
    S: IntoSequence,
{
    let left = to_sequence(sequence);
    let right = to_sequence(other);
    let length = left.len().max(right.len());
    (0..length)
        .map(|index| function(left.get(index), right.get(index), index))
        .collect()
}

// =============================================================================
// Reordering
// =============================================================================

/// Reverses the order of the elements.
pub fn reverse<S: IntoSequence>(sequence: S) -> Vec<S::Item> {
    let mut reversed = to_sequence(sequence);
    reversed.reverse();
    reversed
}

/// Sorts the elements with a three-way `comparator`.
///
/// The sort is stable, and a comparator that is not a total order (one that
/// ties `NaN` with everything, say) yields some permutation rather than a
/// panic.
pub fn sort<C, S>(mut comparator: C, sequence: S) -> Vec<S::Item>
where
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    S: IntoSequence,
{
    merge_sort(to_sequence(sequence), &mut comparator)
}

fn merge_sort<T, C>(mut items: Vec<T>, comparator: &mut C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let upper = items.split_off(items.len() / 2);
    let lower = merge_sort(items, comparator);
    let upper = merge_sort(upper, comparator);

    let mut merged = Vec::with_capacity(lower.len() + upper.len());
    let mut lower = lower.into_iter().peekable();
    let mut upper = upper.into_iter().peekable();
    loop {
        let take_upper = match (lower.peek(), upper.peek()) {
            (Some(low), Some(high)) => comparator(high, low) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_upper { upper.next() } else { lower.next() };
        merged.extend(next);
    }
    merged
}

/// Returns a uniformly shuffled copy using the default random source.
///
/// Use [`Shuffler`] to control the source.
pub fn shuffle<S: IntoSequence>(sequence: S) -> Vec<S::Item> {
    Shuffler::default().shuffle(sequence)
}

/// Rotates the elements cyclically by `floor(|offset|)` positions.
///
/// A positive offset rotates left (the front moves to the back), a negative
/// one rotates right. Infinite offsets and empty sequences leave the order
/// unchanged.
///
/// ```rust
/// use pipekit::array::rotate;
///
/// assert_eq!(rotate(1, [1, 2, 3]).unwrap(), vec![2, 3, 1]);
/// assert_eq!(rotate(-1, [1, 2, 3]).unwrap(), vec![3, 1, 2]);
/// assert_eq!(rotate(f64::INFINITY, [1, 2, 3]).unwrap(), vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Type`](crate::Error::Type) when `offset` is `NaN`.
#[allow(clippy::cast_precision_loss)]
pub fn rotate<N, S>(offset: N, sequence: S) -> Result<Vec<S::Item>>
where
    N: Numeric,
    S: IntoSequence,
{
    let offset = validate_number(offset)?;
    let mut rotated = to_sequence(sequence);
    if rotated.is_empty() || offset.is_infinite() {
        return Ok(rotated);
    }

    let shift = to_count(offset.abs().floor() % rotated.len() as f64);
    if offset > 0.0 {
        rotated.rotate_left(shift);
    } else {
        rotated.rotate_right(shift);
    }
    Ok(rotated)
}

/// Removes repeated elements, keeping each first occurrence in place.
pub fn unique<S>(sequence: S) -> Vec<S::Item>
where
    S: IntoSequence,
    S::Item: Hash + Eq,
{
    let elements = to_sequence(sequence);
    let mut seen: HashSet<&S::Item, DistinctHasher> =
        HashSet::with_capacity_and_hasher(elements.len(), DistinctHasher::default());
    let first_occurrences: Vec<bool> = elements
        .iter()
        .map(|element| seen.insert(element))
        .collect();
    drop(seen);

    elements
        .into_iter()
        .zip(first_occurrences)
        .filter_map(|(element, first)| first.then_some(element))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    fn test_merge_sort_is_stable() {
        let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = sort(|left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0), pairs);
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[rstest]
    fn test_sort_tolerates_inconsistent_comparator() {
        let values = vec![f64::NAN, 3.0, f64::NAN, 1.0, 2.0];
        let sorted = sort(numeric_ascending, values);
        assert_eq!(sorted.len(), 5);
    }

    #[rstest]
    #[case(0.5, vec![1, 2, 3])]
    #[case(-2.0, vec![1, 2, 3])]
    #[case(1.9, vec![2, 3])]
    #[case(3.0, vec![])]
    #[case(f64::INFINITY, vec![])]
    fn test_remove_first_counts(#[case] count: f64, #[case] expected: Vec<i32>) {
        assert_eq!(remove_first(count, [1, 2, 3]).unwrap(), expected);
    }

    #[rstest]
    fn test_remove_last_rejects_nan() {
        assert_eq!(
            remove_last(f64::NAN, [1]).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[rstest]
    fn test_rotate_reduces_large_offsets() {
        assert_eq!(rotate(1e300, [1, 2]).unwrap().len(), 2);
        assert_eq!(rotate(7, [1, 2, 3]).unwrap(), vec![2, 3, 1]);
    }

    #[rstest]
    fn test_unique_keeps_first_occurrence_order() {
        assert_eq!(unique(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }
}
