//! The versioned, chainable pipeline.
//!
//! A [`Pipeline`] wraps a sequence in a history of snapshots. Every chain
//! method applies one operation from [`array`](crate::array) to the current
//! snapshot and writes the result back:
//!
//! - with saving on (the default) the result is **appended**, so every
//!   intermediate state stays retrievable;
//! - with saving off it **overwrites** the current snapshot.
//!
//! Chain methods return `&mut Self`, or `Result<&mut Self>` when the
//! operation validates an argument. Validation happens before anything is
//! written: a failed call leaves the history exactly as it was.
//!
//! Accessors take an optional snapshot index (`None` means the current one)
//! and return `None` for out-of-range queries instead of failing.
//!
//! # Examples
//!
//! ```rust
//! use pipekit::pipeline::Pipeline;
//!
//! let mut pipeline = Pipeline::new(vec![1, 2, 3]);
//! pipeline.transform(|value| value * 2).keep_if(|value| *value > 2);
//!
//! assert_eq!(pipeline.result(None), Some(vec![4, 6]));
//! assert_eq!(pipeline.result(0), Some(vec![1, 2, 3]));
//! assert_eq!(pipeline.snapshot_count(), 3);
//! assert_eq!(pipeline.result(3), None);
//! ```
//!
//! Fallible steps chain with `?`:
//!
//! ```rust
//! use pipekit::pipeline::Pipeline;
//!
//! # fn main() -> pipekit::Result<()> {
//! let mut pipeline = Pipeline::new(["a", "b", "c", "d"]);
//! pipeline.rotate(1)?.remove_last(2)?.reverse();
//! assert_eq!(pipeline.result(None), Some(vec!["c", "b"]));
//! # Ok(())
//! # }
//! ```

mod history;
mod options;

pub use options::PipelineOptions;

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::array::{self, Shuffler};
use crate::error::Result;
use crate::number::Numeric;
use crate::sequence::{IntoSequence, Measure, to_sequence};

use history::History;

/// A sequence together with the history of everything done to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline<T> {
    history: History<T>,
}

impl<T> Pipeline<T> {
    /// Creates a pipeline with saving on and debug logging off.
    pub fn new<S: IntoSequence<Item = T>>(initial: S) -> Self {
        Self::with_options(initial, PipelineOptions::new())
    }

    /// Creates a pipeline with explicit save and debug modes.
    pub fn with_modes<S: IntoSequence<Item = T>>(initial: S, save: bool, debug: bool) -> Self {
        Self::with_options(initial, PipelineOptions { save, debug })
    }

    /// Creates a pipeline from `options`.
    pub fn with_options<S: IntoSequence<Item = T>>(initial: S, options: PipelineOptions) -> Self {
        Self {
            history: History::new(to_sequence(initial), options),
        }
    }

    /// Returns the current save and debug modes.
    pub const fn options(&self) -> PipelineOptions {
        self.history.options()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the number of stored snapshots.
    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }

    /// Borrows the current snapshot.
    pub fn current(&self) -> &[T] {
        self.history.current()
    }

    /// Borrows snapshot `index` (`None` for the current one).
    pub fn snapshot(&self, index: impl Into<Option<usize>>) -> Option<&[T]> {
        match index.into() {
            Some(index) => self.history.get(index),
            None => Some(self.history.current()),
        }
    }

    /// Returns a copy of snapshot `index` (`None` for the current one).
    pub fn result(&self, index: impl Into<Option<usize>>) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.snapshot(index).map(<[T]>::to_vec)
    }

    /// Returns the element count of snapshot `index`.
    pub fn length(&self, index: impl Into<Option<usize>>) -> Option<usize> {
        self.snapshot(index).map(<[T]>::len)
    }

    /// Returns element `position` of snapshot `index`.
    pub fn element_at(&self, position: usize, index: impl Into<Option<usize>>) -> Option<&T> {
        self.snapshot(index)
            .and_then(|snapshot| snapshot.get(position))
    }

    /// Returns the size of every element of snapshot `index`.
    ///
    /// Elements without a size (numbers, for instance) report `None`.
    ///
    /// ```rust
    /// use pipekit::pipeline::Pipeline;
    ///
    /// let pipeline = Pipeline::new(vec!["ab", "", "xyz"]);
    /// assert_eq!(
    ///     pipeline.element_lengths(None),
    ///     Some(vec![Some(2), Some(0), Some(3)])
    /// );
    /// ```
    pub fn element_lengths(&self, index: impl Into<Option<usize>>) -> Option<Vec<Option<usize>>>
    where
        T: Measure,
    {
        self.snapshot(index)
            .map(|snapshot| snapshot.iter().map(Measure::size).collect())
    }
}

impl<T> From<Vec<T>> for Pipeline<T> {
    fn from(initial: Vec<T>) -> Self {
        Self::new(initial)
    }
}

impl<T: Clone + fmt::Debug> Pipeline<T> {
    fn write(&mut self, operation: &'static str, next: Vec<T>) -> &mut Self {
        self.history.write_snapshot(operation, next);
        self
    }

    // =========================================================================
    // Modes
    // =========================================================================

    /// Switches between appending (`true`) and overwriting (`false`).
    ///
    /// Takes effect from the next write; no snapshot is written.
    pub fn save(&mut self, save: bool) -> &mut Self {
        self.history.set_save(save);
        self
    }

    /// Turns logging of written snapshots on or off.
    pub fn debug(&mut self, debug: bool) -> &mut Self {
        self.history.set_debug(debug);
        self
    }

    // =========================================================================
    // Mapping and filtering
    // =========================================================================

    /// Maps every element of the current snapshot.
    pub fn transform<F>(&mut self, function: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        let next = array::transform(function, self.current());
        self.write("transform", next)
    }

    /// Keeps the elements passing `predicate`.
    pub fn keep_if<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        let next = array::keep_if(predicate, self.current());
        self.write("keep_if", next)
    }

    /// Drops the elements passing `predicate`.
    pub fn remove_if<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        let next = array::remove_if(predicate, self.current());
        self.write("remove_if", next)
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Drops the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`](crate::Error::Type) when `count` is `NaN`; the
    /// history is left untouched.
    pub fn remove_first<N: Numeric>(&mut self, count: N) -> Result<&mut Self> {
        let next = array::remove_first(count, self.current())?;
        Ok(self.write("remove_first", next))
    }

    /// Drops the last `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`](crate::Error::Type) when `count` is `NaN`; the
    /// history is left untouched.
    pub fn remove_last<N: Numeric>(&mut self, count: N) -> Result<&mut Self> {
        let next = array::remove_last(count, self.current())?;
        Ok(self.write("remove_last", next))
    }

    /// Places `other` before the current elements.
    pub fn prepend<O: IntoSequence<Item = T>>(&mut self, other: O) -> &mut Self {
        let next = array::prepend(other, self.current());
        self.write("prepend", next)
    }

    /// Places `other` after the current elements.
    pub fn append<O: IntoSequence<Item = T>>(&mut self, other: O) -> &mut Self {
        let next = array::append(other, self.current());
        self.write("append", next)
    }

    /// Combines the current elements with `other` position by position.
    ///
    /// See [`array::merge_with`] for the treatment of unequal lengths.
    pub fn merge_with<O, F>(&mut self, function: F, other: O) -> &mut Self
    where
        O: IntoSequence,
        F: FnMut(Option<&T>, Option<&O::Item>, usize) -> T,
    {
        let next = array::merge_with(function, other, self.current());
        self.write("merge_with", next)
    }

    /// Replaces the current snapshot with a copy of `sequence`.
    pub fn replace_with<S: IntoSequence<Item = T>>(&mut self, sequence: S) -> &mut Self {
        self.write("replace_with", to_sequence(sequence))
    }

    /// Replaces the current snapshot with an empty sequence.
    pub fn clear(&mut self) -> &mut Self {
        self.write("clear", Vec::new())
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Reverses the current elements.
    pub fn reverse(&mut self) -> &mut Self {
        let next = array::reverse(self.current());
        self.write("reverse", next)
    }

    /// Sorts the current elements with a three-way `comparator`.
    pub fn sort<C>(&mut self, comparator: C) -> &mut Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let next = array::sort(comparator, self.current());
        self.write("sort", next)
    }

    /// Shuffles the current elements with the default random source.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut Shuffler::default())
    }

    /// Shuffles the current elements with `shuffler`.
    pub fn shuffle_with<R>(&mut self, shuffler: &mut Shuffler<R>) -> &mut Self
    where
        R: FnMut() -> f64,
    {
        let next = shuffler.shuffle(self.current());
        self.write("shuffle", next)
    }

    /// Rotates the current elements; see [`array::rotate`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`](crate::Error::Type) when `offset` is `NaN`; the
    /// history is left untouched.
    pub fn rotate<N: Numeric>(&mut self, offset: N) -> Result<&mut Self> {
        let next = array::rotate(offset, self.current())?;
        Ok(self.write("rotate", next))
    }

    /// Removes repeated elements, keeping first occurrences.
    pub fn unique(&mut self) -> &mut Self
    where
        T: Hash + Eq,
    {
        let next = array::unique(self.current());
        self.write("unique", next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_modes_do_not_write() {
        let mut pipeline = Pipeline::new([1]);
        pipeline.save(false).debug(true).save(true);
        assert_eq!(pipeline.snapshot_count(), 1);
        assert_eq!(
            pipeline.options(),
            PipelineOptions::new().with_debug(true)
        );
    }

    #[rstest]
    fn test_snapshot_none_is_current() {
        let mut pipeline = Pipeline::new(vec![3, 1, 2]);
        pipeline.sort(Ord::cmp);
        assert_eq!(pipeline.snapshot(None), Some(pipeline.current()));
        assert_eq!(pipeline.snapshot(1), Some(&[1, 2, 3][..]));
    }

    #[rstest]
    fn test_from_vec_uses_defaults() {
        let pipeline = Pipeline::from(vec!['x']);
        assert_eq!(pipeline.options(), PipelineOptions::default());
    }
}
