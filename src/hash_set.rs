use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::DefaultHashBuilder;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash set implemented over the displacement-chaining [`HashTable`].
///
/// `HashSet<T, S>` stores values of type `T` where `T` implements
/// `Hash + Eq`; it is the key-only twin of [`HashMap`](crate::HashMap) —
/// the same slot arena and collision chains, without the payload field. The
/// hasher builder `S` is supplied once at construction and fixed for the
/// set's lifetime.
///
/// # Examples
///
/// ```rust
/// # #[cfg(any(feature = "std", feature = "foldhash"))]
/// # {
/// use chain_hash::HashSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// set.insert(3);
///
/// assert!(set.contains(&3));
/// assert!(!set.contains(&4));
/// # }
/// ```
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    table: HashTable<T>,
    hash_builder: S,
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug + Hash + Eq,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash set with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # {
    /// use std::collections::hash_map::RandomState;
    ///
    /// use chain_hash::hash_set::HashSet;
    ///
    /// let set: HashSet<i32, _> = HashSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates a new hash set with the specified capacity and hasher
    /// builder.
    ///
    /// The set will hold at least `capacity` values before its first
    /// resize.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the slot count of the underlying arena.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all values, preserving the allocated arena.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the underlying arena as far as the doubling sequence allows
    /// for the current number of values.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// # }
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.hash_builder.hash_one(&value);
        match self.table.entry(hash, |v| v == &value) {
            TableEntry::Occupied(_) => false,
            TableEntry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |v| v == value).is_some()
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if it was present; the absent case is an ordinary
    /// `false`, never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.insert(2);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// # }
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.remove(hash, |v| v == value)
    }

    /// Returns a reference to the stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |v| v == value)
    }

    /// Adds a value, replacing and returning any stored value equal to it.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let hash = self.hash_builder.hash_one(&value);
        match self.table.entry(hash, |v| v == &value) {
            TableEntry::Occupied(mut entry) => Some(entry.insert(value)),
            TableEntry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns an iterator over the values, in arena order.
    ///
    /// The order is unspecified and must not be relied upon.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator that removes and yields all values.
    ///
    /// Values not consumed when the iterator drops are still removed.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Keeps only the values for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// for n in 0..8 {
    ///     set.insert(n);
    /// }
    ///
    /// set.retain(|&v| v % 2 == 0);
    /// assert_eq!(set.len(), 4);
    /// # }
    /// ```
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.table.retain(f);
    }

    /// Inserts every value of `other` into `self`, cloning them.
    ///
    /// `other` is left untouched.
    pub fn merge<S2>(&mut self, other: &HashSet<T, S2>)
    where
        T: Clone,
        S2: BuildHasher,
    {
        for value in other.iter() {
            self.insert(value.clone());
        }
    }

    /// Returns the first value satisfying `pred`, in arena order.
    ///
    /// This scans the whole arena rather than one collision chain; use
    /// [`contains`](Self::contains)/[`get`](Self::get) whenever the value
    /// itself is available.
    pub fn find_by(&self, pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.table.find_by(pred)
    }

    /// Returns `true` if any value satisfies `pred`. Scans the whole arena.
    pub fn contains_by(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.table.contains_by(pred)
    }

    /// Returns `true` if `self` and `other` share no values.
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|v| !other.contains(v))
        } else {
            other.iter().all(|v| !self.contains(v))
        }
    }

    /// Returns `true` if every value of `self` is in `other`.
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        self.len() <= other.len() && self.iter().all(|v| other.contains(v))
    }

    /// Returns `true` if every value of `other` is in `self`.
    pub fn is_superset(&self, other: &HashSet<T, S>) -> bool {
        other.is_subset(self)
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates a new hash set using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::new();
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new hash set holding at least `capacity` values before the
    /// first resize, using the default hasher builder.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the values of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A draining iterator over the values of a `HashSet`.
pub struct Drain<'a, T> {
    inner: crate::hash_table::Drain<'a, T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k0: u64,
        k1: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k0, self.k1)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            Self {
                k0: OsRng.try_next_u64().unwrap_or(0),
                k1: OsRng.try_next_u64().unwrap_or(0),
            }
        }
    }

    #[test]
    fn new_and_with_hasher() {
        let set: HashSet<i32, SipHashBuilder> = HashSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        let set2 = HashSet::<i32, _>::with_hasher(SipHashBuilder::default());
        assert!(set2.is_empty());
    }

    #[test]
    fn insert_and_contains() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());

        assert!(set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1));

        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);

        assert!(set.insert(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
    }

    #[test]
    fn remove_and_take() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        set.insert("a".to_string());
        set.insert("b".to_string());

        assert!(set.remove(&"a".to_string()));
        assert!(!set.remove(&"a".to_string()));
        assert_eq!(set.take(&"b".to_string()), Some("b".to_string()));
        assert_eq!(set.take(&"b".to_string()), None);
        assert!(set.is_empty());
    }

    #[test]
    fn get_and_replace() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        set.insert("value".to_string());

        assert_eq!(set.get(&"value".to_string()), Some(&"value".to_string()));
        assert_eq!(set.get(&"other".to_string()), None);

        assert_eq!(set.replace("value".to_string()), Some("value".to_string()));
        assert_eq!(set.replace("other".to_string()), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iter_visits_all() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..30i32 {
            set.insert(n);
        }

        let mut values: Vec<i32> = set.iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn drain_empties_set() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..10i32 {
            set.insert(n);
        }

        let drained: Vec<i32> = set.drain().collect();
        assert_eq!(drained.len(), 10);
        assert!(set.is_empty());

        set.insert(1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn retain_filters_values() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..50i32 {
            set.insert(n);
        }

        set.retain(|&v| v < 10);
        assert_eq!(set.len(), 10);
        for n in 0..50i32 {
            assert_eq!(set.contains(&n), n < 10);
        }
    }

    #[test]
    fn merge_unions_values() {
        let mut a = HashSet::with_hasher(SipHashBuilder::default());
        a.insert(1);
        a.insert(2);

        let mut b = HashSet::with_hasher(SipHashBuilder::default());
        b.insert(2);
        b.insert(3);

        a.merge(&b);
        assert_eq!(a.len(), 3);
        assert!(a.contains(&1) && a.contains(&2) && a.contains(&3));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn find_by_and_contains_by() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..10i32 {
            set.insert(n * 7);
        }

        assert_eq!(set.find_by(|&v| v > 60), Some(&63));
        assert!(set.contains_by(|&v| v == 49));
        assert!(!set.contains_by(|&v| v == 50));
    }

    #[test]
    fn subset_superset_disjoint() {
        let builder = SipHashBuilder::default();
        let mut small = HashSet::with_hasher(builder.clone());
        let mut large = HashSet::with_hasher(builder.clone());
        let mut other = HashSet::with_hasher(builder);

        for n in 0..5i32 {
            small.insert(n);
        }
        for n in 0..10i32 {
            large.insert(n);
        }
        for n in 100..105i32 {
            other.insert(n);
        }

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(large.is_superset(&small));
        assert!(small.is_disjoint(&other));
        assert!(!small.is_disjoint(&large));
    }

    #[test]
    fn eq_ignores_insertion_order() {
        let mut a = HashSet::with_hasher(SipHashBuilder::default());
        let mut b = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..20i32 {
            a.insert(n);
        }
        for n in (0..20i32).rev() {
            b.insert(n);
        }
        assert_eq!(a, b);

        b.insert(99);
        assert_ne!(a, b);
    }

    #[test]
    fn grows_and_shrinks_through_churn() {
        let mut set = HashSet::with_hasher(SipHashBuilder::default());
        for n in 0..500i32 {
            set.insert(n);
        }
        let grown = set.capacity();
        assert!(grown > 8);

        for n in 0..495i32 {
            assert!(set.remove(&n));
        }
        assert!(set.capacity() < grown);
        for n in 495..500i32 {
            assert!(set.contains(&n));
        }
    }
}
