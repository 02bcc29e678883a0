//! Reference comparators for [`sort`](super::sort).
//!
//! Both are plain functions, so they can be passed by name:
//!
//! ```rust
//! use pipekit::array::sort;
//! use pipekit::array::sorts::{lexical, numeric_ascending};
//!
//! let values = ["33", "2", "121"];
//! assert_eq!(sort(numeric_ascending, values), vec!["2", "33", "121"]);
//! assert_eq!(sort(lexical, values), vec!["121", "2", "33"]);
//! ```

use std::cmp::Ordering;

use crate::number::ToNumber;

/// Orders values by their numeric reading, smallest first.
///
/// Both sides are read with [`ToNumber`] and subtracted. Pairs whose
/// difference is `NaN` (an unreadable side, or two equal infinities) tie.
pub fn numeric_ascending<T: ToNumber + ?Sized>(left: &T, right: &T) -> Ordering {
    (left.to_number() - right.to_number())
        .partial_cmp(&0.0)
        .unwrap_or(Ordering::Equal)
}

/// Orders values by their string form.
pub fn lexical<T: ToString + ?Sized>(left: &T, right: &T) -> Ordering {
    left.to_string().cmp(&right.to_string())
}
