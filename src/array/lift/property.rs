//! Named property extraction.
//!
//! [`Properties`] is the capability "this value exposes named fields". Maps
//! keyed by strings expose their entries; scalars and strings expose nothing,
//! so [`pluck`] reports every lookup on them as absent.
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use pipekit::array::{lift::pluck, transform};
//!
//! let rows: Vec<BTreeMap<&str, i32>> = vec![
//!     [("id", 1), ("score", 10)].into_iter().collect(),
//!     [("id", 2)].into_iter().collect(),
//! ];
//! assert_eq!(transform(pluck("score"), &rows), vec![Some(10), None]);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};

/// Values that can be queried for a named property.
pub trait Properties {
    /// The type of property values.
    type Value;

    /// Returns the value of the property `name`, or `None` when absent.
    fn property(&self, name: &str) -> Option<Self::Value>;

    /// Returns `true` when the property `name` is present.
    fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

impl<K, V, S> Properties for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<K, V> Properties for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Clone,
{
    type Value = V;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<P: Properties> Properties for Option<P> {
    type Value = P::Value;

    fn property(&self, name: &str) -> Option<P::Value> {
        self.as_ref().and_then(|inner| inner.property(name))
    }
}

impl<P: Properties + ?Sized> Properties for &P {
    type Value = P::Value;

    #[inline]
    fn property(&self, name: &str) -> Option<P::Value> {
        (**self).property(name)
    }
}

macro_rules! impl_without_properties {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Properties for $scalar {
                type Value = Infallible;

                #[inline]
                fn property(&self, _name: &str) -> Option<Infallible> {
                    None
                }
            }
        )*
    };
}

impl_without_properties!(
    (),
    bool,
    char,
    str,
    String,
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

/// Returns a function reading the property `name` from its argument.
pub fn pluck<P: Properties + ?Sized>(name: impl Into<String>) -> impl Fn(&P) -> Option<P::Value> {
    let name = name.into();
    move |value: &P| value.property(&name)
}
