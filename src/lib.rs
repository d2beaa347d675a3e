#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// An amortized doubling/halving dynamic array.
///
/// This module provides `Array`, a contiguous sequence with explicit
/// element shifts and the textbook grow/shrink policy.
pub mod array;

/// A HashMap implementation over the displacement-chaining table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

/// A hash set implementation over the displacement-chaining table.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

/// An array-backed binary min-heap.
pub mod min_heap;

/// A union-find forest with path compression and union by rank.
pub mod union_find;

pub use array::Array;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use min_heap::MinHeap;
pub use union_find::UnionFind;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder [`HashMap`] and [`HashSet`] default to.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder [`HashMap`] and [`HashSet`] default to.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Uninhabited placeholder; enable `std` or `foldhash` for a usable
        /// default hasher, or supply one through `with_hasher`.
        #[derive(Clone)]
        pub enum DefaultHashBuilder {}
    }
}
