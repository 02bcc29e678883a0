//! Sequence coercion and element measurement.
//!
//! Every operation of the crate starts by turning its input into a fresh,
//! owned [`Vec`] through [`to_sequence`]. Borrowed inputs are cloned, owned
//! inputs are consumed, and `None` becomes the empty sequence.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use pipekit::sequence::to_sequence;
//!
//! let source = vec![1, 2, 3];
//! let copy = to_sequence(&source);
//! assert_eq!(copy, source);
//!
//! let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(to_sequence(set), vec![1, 2, 3]);
//!
//! assert_eq!(to_sequence(None::<Vec<i32>>), Vec::<i32>::new());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Conversion into an ordered, owned sequence.
pub trait IntoSequence {
    /// The element type of the resulting sequence.
    type Item;

    /// Produces a new `Vec` holding the elements in iteration order.
    fn into_sequence(self) -> Vec<Self::Item>;
}

/// Coerces `input` into a new ordered sequence.
#[inline]
pub fn to_sequence<S: IntoSequence>(input: S) -> Vec<S::Item> {
    input.into_sequence()
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;

    #[inline]
    fn into_sequence(self) -> Vec<T> {
        self
    }
}

impl<T: Clone> IntoSequence for &Vec<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> IntoSequence for &[T] {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T: Clone, const N: usize> IntoSequence for &[T; N] {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T> IntoSequence for VecDeque<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T: Clone> IntoSequence for &VecDeque<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> IntoSequence for BTreeSet<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, S> IntoSequence for HashSet<T, S> {
    type Item = T;

    fn into_sequence(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<S: IntoSequence> IntoSequence for Option<S> {
    type Item = S::Item;

    fn into_sequence(self) -> Vec<S::Item> {
        self.map_or_else(Vec::new, IntoSequence::into_sequence)
    }
}

// =============================================================================
// Measure
// =============================================================================

/// Reports the size of a value, when the value has one.
///
/// Collections and strings report their element (character) count; scalars
/// report `None`.
///
/// # Examples
///
/// ```rust
/// use pipekit::sequence::Measure;
///
/// assert_eq!("héllo".size(), Some(5));
/// assert_eq!(vec![1, 2].size(), Some(2));
/// assert_eq!(7_i32.size(), None);
/// assert_eq!(Some("ab").size(), Some(2));
/// ```
pub trait Measure {
    /// Returns the number of elements of this value, or `None` when the
    /// notion does not apply.
    fn size(&self) -> Option<usize>;
}

impl Measure for str {
    fn size(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Measure for String {
    fn size(&self) -> Option<usize> {
        self.as_str().size()
    }
}

impl<T> Measure for [T] {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Measure for [T; N] {
    fn size(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Measure for Vec<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Measure for VecDeque<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Measure for HashMap<K, V, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Measure for BTreeMap<K, V> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Measure for HashSet<T, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Measure for BTreeSet<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Measure> Measure for Option<T> {
    fn size(&self) -> Option<usize> {
        self.as_ref().and_then(Measure::size)
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    #[inline]
    fn size(&self) -> Option<usize> {
        (**self).size()
    }
}

impl<T: Measure + ?Sized> Measure for Box<T> {
    #[inline]
    fn size(&self) -> Option<usize> {
        (**self).size()
    }
}

macro_rules! impl_sizeless {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Measure for $scalar {
                #[inline]
                fn size(&self) -> Option<usize> {
                    None
                }
            }
        )*
    };
}

impl_sizeless!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_borrowed_input_is_copied() {
        let source = vec![String::from("a"), String::from("b")];
        let mut copy = to_sequence(&source);
        copy.push(String::from("c"));
        assert_eq!(source.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[rstest]
    fn test_nested_option_flattens_to_empty() {
        let input: Option<Option<Vec<u8>>> = Some(None);
        assert!(to_sequence(input).is_empty());
    }

    #[rstest]
    fn test_deque_keeps_front_to_back_order() {
        let mut deque = VecDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(to_sequence(&deque), vec![1, 2]);
    }

    #[rstest]
    fn test_measure_maps_and_scalars() {
        let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.size(), Some(2));
        assert_eq!(true.size(), None);
        assert_eq!(None::<String>.size(), None);
    }
}
