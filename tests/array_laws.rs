#![cfg(feature = "array")]
//! Property-based tests for the sequence operations.
//!
//! - `keep_if(p) ++ remove_if(p)` is a permutation of the input, and
//!   each side preserves relative order
//! - `rotate(0) == rotate(k * len) == id`
//! - `rotate(-n) . rotate(n) == id`
//! - `reverse . reverse == id`
//! - `transform(id) == id`
//! - `unique` is idempotent and keeps first occurrences
//! - `sort` is a stable, ordered permutation
//! - `remove_first(n) ++ tail == input` where `tail` is what was removed

use pipekit::array::{
    keep_if, prepend, remove_first, remove_if, remove_last, reverse, rotate, shuffler, sort,
    transform, unique,
};
use pipekit::compose::identity;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-50_i16..50, 0..40)
}

proptest! {
    #[test]
    fn prop_keep_and_remove_partition(values in small_vec(), pivot in -50_i16..50) {
        let kept = keep_if(|value: &i16| *value < pivot, &values);
        let removed = remove_if(|value: &i16| *value < pivot, &values);

        prop_assert_eq!(kept.len() + removed.len(), values.len());
        prop_assert!(kept.iter().all(|value| *value < pivot));
        prop_assert!(removed.iter().all(|value| *value >= pivot));

        let mut combined = prepend(kept, removed);
        let mut expected = values;
        combined.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_rotate_by_multiple_of_length_is_identity(values in small_vec(), multiple in -3_i64..=3) {
        let length = i64::try_from(values.len()).unwrap();
        prop_assert_eq!(rotate(0, &values).unwrap(), values.clone());
        prop_assert_eq!(rotate(length * multiple, &values).unwrap(), values);
    }

    #[test]
    fn prop_rotate_is_inverted_by_negation(values in small_vec(), offset in -100_i32..100) {
        let rotated = rotate(offset, &values).unwrap();
        prop_assert_eq!(rotate(-offset, rotated).unwrap(), values);
    }

    #[test]
    fn prop_reverse_is_an_involution(values in small_vec()) {
        prop_assert_eq!(reverse(reverse(&values)), values);
    }

    #[test]
    fn prop_transform_identity(values in small_vec()) {
        prop_assert_eq!(transform(|value: &i16| identity(*value), &values), values);
    }

    #[test]
    fn prop_unique_is_idempotent(values in small_vec()) {
        let once = unique(&values);
        prop_assert_eq!(unique(&once), once.clone());
        for (position, value) in once.iter().enumerate() {
            let first = values.iter().position(|candidate| candidate == value).unwrap();
            let previous_first = once[..position]
                .iter()
                .map(|earlier| values.iter().position(|candidate| candidate == earlier).unwrap())
                .max();
            prop_assert!(previous_first.is_none_or(|earlier| earlier < first));
        }
    }

    #[test]
    fn prop_sort_is_stable_and_ordered(values in prop::collection::vec((0_u8..5, any::<u16>()), 0..40)) {
        let sorted = sort(|left: &(u8, u16), right: &(u8, u16)| left.0.cmp(&right.0), &values);
        let mut expected = values;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_remove_first_and_last_split_the_sequence(values in small_vec(), count in 0_usize..50) {
        let tail = remove_first(count, &values).unwrap();
        let head = remove_last(values.len().saturating_sub(count), &values).unwrap();
        prop_assert_eq!(prepend(head, tail), values);
    }

    #[test]
    fn prop_seeded_shuffle_is_reproducible(values in small_vec(), seed in any::<u64>()) {
        let mut first_rng = fastrand::Rng::with_seed(seed);
        let mut second_rng = fastrand::Rng::with_seed(seed);
        let first = shuffler(move || first_rng.f64()).shuffle(&values);
        let second = shuffler(move || second_rng.f64()).shuffle(&values);
        prop_assert_eq!(&first, &second);

        let mut sorted = first;
        let mut expected = values;
        sorted.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }
}
