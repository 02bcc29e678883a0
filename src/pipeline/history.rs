//! The snapshot buffer behind a pipeline.

use std::fmt;
use std::mem;

use super::options::PipelineOptions;

/// Ordered snapshots of a pipeline, oldest first.
///
/// The current snapshot is held apart from the earlier ones, so the buffer
/// can never be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct History<T> {
    earlier: Vec<Vec<T>>,
    current: Vec<T>,
    options: PipelineOptions,
}

impl<T> History<T> {
    pub(crate) const fn new(initial: Vec<T>, options: PipelineOptions) -> Self {
        Self {
            earlier: Vec::new(),
            current: initial,
            options,
        }
    }

    pub(crate) const fn options(&self) -> PipelineOptions {
        self.options
    }

    pub(crate) const fn set_save(&mut self, save: bool) {
        self.options.save = save;
    }

    pub(crate) const fn set_debug(&mut self, debug: bool) {
        self.options.debug = debug;
    }

    pub(crate) fn len(&self) -> usize {
        self.earlier.len() + 1
    }

    pub(crate) fn last_index(&self) -> usize {
        self.earlier.len()
    }

    pub(crate) fn current(&self) -> &[T] {
        &self.current
    }

    /// Returns the snapshot at `index`, or `None` when out of range.
    pub(crate) fn get(&self, index: usize) -> Option<&[T]> {
        match index.cmp(&self.earlier.len()) {
            std::cmp::Ordering::Less => Some(&self.earlier[index]),
            std::cmp::Ordering::Equal => Some(&self.current),
            std::cmp::Ordering::Greater => None,
        }
    }
}

impl<T: fmt::Debug> History<T> {
    /// Stores `next` as the current snapshot.
    ///
    /// With saving on the previous current snapshot is kept; otherwise it is
    /// replaced.
    pub(crate) fn write_snapshot(&mut self, operation: &'static str, next: Vec<T>) {
        let PipelineOptions { save, debug } = self.options;
        if debug {
            let index = if save { self.len() } else { self.last_index() };
            tracing::debug!(
                operation,
                index,
                snapshot = ?next,
                "pipeline snapshot"
            );
        }

        if save {
            let previous = mem::replace(&mut self.current, next);
            self.earlier.push(previous);
        } else {
            self.current = next;
        }

        let mode = if save { "append" } else { "overwrite" };
        tracing::trace!(
            operation,
            mode,
            snapshots = self.len(),
            "snapshot written"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_earlier_snapshots() {
        let mut history = History::new(vec![1], PipelineOptions::new());
        history.write_snapshot("test", vec![2]);
        history.set_save(false);
        history.write_snapshot("test", vec![3]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), Some(&[1][..]));
        assert_eq!(history.get(1), Some(&[3][..]));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_last_index_tracks_current() {
        let mut history = History::new(Vec::<u8>::new(), PipelineOptions::new());
        assert_eq!(history.last_index(), 0);
        history.write_snapshot("test", vec![1]);
        assert_eq!(history.last_index(), 1);
        assert_eq!(history.current(), &[1]);
    }
}
