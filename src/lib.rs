//! # pipekit
//!
//! Function composition primitives, pure sequence operations and a
//! versioned, chainable pipeline.
//!
//! ## Overview
//!
//! - **Composition**: [`Function`](compose::Function) handles with `pipe`,
//!   `compose`, `partial` and `restrict_arity`, plus the `compose!` and
//!   `pipe!` macros
//! - **Sequence operations**: `transform`, `keep_if`, `remove_if`, `rotate`,
//!   `unique`, `sort`, `shuffle` and friends, each returning a new `Vec`
//! - **Lifts**: arithmetic, comparison and property access turned into
//!   element-wise functions
//! - **Pipeline**: [`Pipeline`](pipeline::Pipeline) applies operations in a
//!   chain and keeps every intermediate snapshot
//!
//! ## Feature Flags
//!
//! - `compose`: composition primitives and macros
//! - `array`: sequence operations and lifts
//! - `pipeline`: the versioned pipeline
//! - `fxhash` / `ahash`: hasher used by `unique`
//! - `full`: enable all of the above except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use pipekit::prelude::*;
//!
//! let mut pipeline = Pipeline::new(vec![1.0, 2.0, 3.0]);
//! pipeline
//!     .transform(multiply_by(2))
//!     .keep_if(greater_than(2.0));
//!
//! assert_eq!(pipeline.result(None), Some(vec![4.0, 6.0]));
//! assert_eq!(pipeline.result(0), Some(vec![1.0, 2.0, 3.0]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the error types, coercion traits and every enabled module's
/// public items.
///
/// # Usage
///
/// ```rust
/// use pipekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::number::{Numeric, ToNumber};
    pub use crate::sequence::{IntoSequence, Measure, to_sequence};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "array")]
    pub use crate::array::lift::*;
    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;
}

pub mod error;
pub mod number;
pub mod sequence;
pub mod validation;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "pipeline")]
pub mod pipeline;

pub use error::{Error, ErrorKind, Result};
