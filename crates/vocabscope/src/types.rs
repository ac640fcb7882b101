//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a frequency count.
///
/// These are constrained to be unsigned primitive integers.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

/// A type that can be used as a frequency table key.
pub trait KeyType: Eq + Hash + Clone + Debug + Send + Sync {}

impl<T> KeyType for T where T: Eq + Hash + Clone + Debug + Send + Sync {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VSHashMap<K, V> {
            VSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VSHashMap<K, V> {
            VSHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type VSHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VSHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VSHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type VSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VSHashMap<K, V> {
            VSHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VSHashMap<K, V> {
            VSHashMap::with_capacity(capacity)
        }
    }
}
