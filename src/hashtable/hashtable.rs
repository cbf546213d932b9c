//! The HashTable

use log::{debug, trace};

use super::root::{fmt, iter, mem, string::String};

use super::failure::{Failure, Result};
use super::hashcore::{DefaultHashHooks, HashHooks};
use super::hashcore::capacity::{Capacity, Size};
use super::hashcore::slots::SlotArray;
use super::iterator::{KeyIterator, KeyValueIterator, ValueIterator, ValueIteratorMut};

//
//  Public Interface
//

/// `HashTable`
///
/// A closed hash table, whose keys are non-empty strings.
#[derive(Clone)]
pub struct HashTable<V, H: HashHooks = DefaultHashHooks> {
    //  Hooks of the HashTable.
    hooks: H,
    //  Number of slots, load factor, and threshold.
    capacity: Capacity,
    //  The number of occupied slots; tombstones are not counted.
    size: Size,
    slots: SlotArray<V>,
}

impl<V> HashTable<V> {
    /// Creates a new instance of the `HashTable` with 17 slots and a load
    /// factor of 0.75.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let table: HashTable<i32> = HashTable::new();
    ///
    /// assert_eq!(0, table.len());
    /// assert_eq!(17, table.capacity());
    /// assert_eq!(0.75, table.load_factor());
    /// assert_eq!(12, table.threshold());
    /// ```
    pub fn new() -> Self { Self::with_hooks(DefaultHashHooks) }

    /// Creates a new instance of the `HashTable` with at least `capacity`
    /// slots, and the given `load_factor`.
    ///
    /// If `capacity` is 0, it is replaced by 17.
    /// If `capacity` is not prime, it is rounded up to the next prime.
    /// If `load_factor` is not within (0, 1], it is replaced by 0.75.
    ///
    /// #   Panics
    ///
    /// Panics if no prime greater than or equal to `capacity` fits in `usize`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let table: HashTable<i32> = HashTable::with_capacity_and_load_factor(20, 2.0);
    ///
    /// assert_eq!(23, table.capacity());
    /// assert_eq!(0.75, table.load_factor());
    /// assert_eq!(17, table.threshold());
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Self {
        Self::with_capacity_and_load_factor_and_hooks(capacity, load_factor, DefaultHashHooks)
    }
}

impl<V, H: HashHooks> HashTable<V, H> {
    /// Creates a new instance of the `HashTable` with 17 slots, a load factor
    /// of 0.75, and the given hooks.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::{HashTable, HashHooks};
    /// struct LengthHooks;
    ///
    /// impl HashHooks for LengthHooks {
    ///     fn hash(&self, key: &str) -> usize { key.len() }
    /// }
    ///
    /// let mut table = HashTable::with_hooks(LengthHooks);
    /// table.put("a", 1);
    /// table.put("b", 2);
    ///
    /// assert_eq!(Some(&2), table.get("b"));
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_capacity_and_load_factor_and_hooks(0, 0.0, hooks)
    }

    /// Creates a new instance of the `HashTable` with at least `capacity`
    /// slots, the given `load_factor`, and the given hooks.
    ///
    /// See `with_capacity_and_load_factor` for the adjustments made to
    /// `capacity` and `load_factor`.
    ///
    /// #   Panics
    ///
    /// Panics if no prime greater than or equal to `capacity` fits in `usize`.
    pub fn with_capacity_and_load_factor_and_hooks(capacity: usize, load_factor: f32, hooks: H)
        -> Self
    {
        let capacity = Capacity::new(capacity, load_factor);

        Self {
            hooks,
            capacity,
            size: Size(0),
            slots: SlotArray::new(capacity),
        }
    }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// assert!(table.is_empty());
    ///
    /// table.put("a", 1);
    /// assert!(!table.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size.0 == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// assert_eq!(0, table.len());
    ///
    /// table.put("a", 1);
    /// assert_eq!(1, table.len());
    /// ```
    pub fn len(&self) -> usize { self.size.0 }

    /// Returns the number of slots of the instance, always prime.
    pub fn capacity(&self) -> usize { self.capacity.slots() }

    /// Returns the number of elements at or above which the next insertion
    /// first grows the instance.
    pub fn threshold(&self) -> usize { self.capacity.threshold() }

    /// Returns the load factor of the instance.
    pub fn load_factor(&self) -> f32 { self.capacity.load_factor() }

    /// Returns a reference to the hooks of the instance.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns `true` if the table contains a value for the specified key.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", false);
    ///
    /// assert!(table.contains_key("a"));
    /// assert!(!table.contains_key("b"));
    /// assert!(!table.contains_key(""));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    /// Returns a reference to the value corresponding to the key, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", false);
    ///
    /// assert_eq!(Some(&false), table.get("a"));
    /// assert_eq!(None, table.get("b"));
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns references to the key and value corresponding to the key, if
    /// any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", false);
    ///
    /// assert_eq!(Some(("a", &false)), table.get_key_value("a"));
    /// assert_eq!(None, table.get_key_value("b"));
    /// ```
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        if key.is_empty() {
            return None;
        }

        self.slots.get(key, self.capacity, &self.hooks)
            .map(|e| (e.key.as_str(), &e.value))
    }

    /// Returns a mutable reference to the value corresponding to the key, if
    /// any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", 1);
    ///
    /// if let Some(value) = table.get_mut("a") {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(Some(&2), table.get("a"));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if key.is_empty() {
            return None;
        }

        self.slots.get_mut(key, self.capacity, &self.hooks)
            .map(|e| &mut e.value)
    }

    /// Returns an iterator over the keys, in slot order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let table: HashTable<_> = [("b", 2), ("a", 1)].iter().copied().collect();
    ///
    /// let keys: Vec<_> = table.keys().collect();
    /// assert_eq!(vec!["a", "b"], keys);
    /// ```
    pub fn keys(&self) -> KeyIterator<'_, V> { KeyIterator::create(self.slots.iter()) }

    /// Returns an iterator over the values, in slot order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let table: HashTable<_> = [("b", 2), ("a", 1)].iter().copied().collect();
    ///
    /// let values: Vec<_> = table.values().copied().collect();
    /// assert_eq!(vec![1, 2], values);
    /// ```
    pub fn values(&self) -> ValueIterator<'_, V> { ValueIterator::create(self.slots.iter()) }

    /// Returns an iterator over mutable references to the values, in slot
    /// order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table: HashTable<_> = [("b", 2), ("a", 1)].iter().copied().collect();
    ///
    /// for value in table.values_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(Some(&20), table.get("b"));
    /// ```
    pub fn values_mut(&mut self) -> ValueIteratorMut<'_, V> {
        ValueIteratorMut::create(self.slots.iter_mut())
    }

    /// Returns an iterator over the key-value pairs, in slot order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let table: HashTable<_> = [("b", 2), ("a", 1)].iter().copied().collect();
    ///
    /// let pairs: Vec<_> = table.iter().collect();
    /// assert_eq!(vec![("a", &1), ("b", &2)], pairs);
    /// ```
    pub fn iter(&self) -> KeyValueIterator<'_, V> { KeyValueIterator::create(self.slots.iter()) }

    /// Clears the table, removing all elements.
    ///
    /// The capacity, and thus the threshold, are left unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table: HashTable<_> = [("a", 1), ("b", 2)].iter().copied().collect();
    /// table.clear();
    ///
    /// assert!(table.is_empty());
    /// assert_eq!(17, table.capacity());
    /// ```
    pub fn clear(&mut self) {
        trace!("Clearing {} elements", self.size.0);

        self.slots.clear();
        self.size = Size(0);
    }

    /// Removes the key from the table, returning its value, if the key was
    /// present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", 1);
    ///
    /// assert_eq!(Some(1), table.take("a"));
    /// assert_eq!(None, table.take("a"));
    /// ```
    pub fn take(&mut self, key: &str) -> Option<V> {
        if key.is_empty() {
            return None;
        }

        let entry = self.slots.remove(key, self.capacity, &self.hooks)?;

        debug_assert!(self.size.0 > 0);
        self.size = Size(self.size.0 - 1);

        Some(entry.value)
    }

    /// Removes the key from the table, returning whether the key was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    /// table.put("a", 1);
    ///
    /// assert!(table.remove("a"));
    /// assert!(!table.remove("a"));
    /// assert!(!table.remove(""));
    /// ```
    pub fn remove(&mut self, key: &str) -> bool { self.take(key).is_some() }

    /// Inserts a key-value pair into the table.
    ///
    /// If the size of the table is at or above its threshold, the table first
    /// grows.
    ///
    /// Returns the overwritten value, if the key was already present.
    ///
    /// #   Errors
    ///
    /// Returns an error, leaving the table unchanged:
    ///
    /// -   If the key is empty.
    /// -   If the table needs to grow, and its next capacity overflows.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::failure::Failure;
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    ///
    /// assert_eq!(Ok(None), table.try_put("a", 1));
    /// assert_eq!(Ok(Some(1)), table.try_put("a", 2));
    /// assert_eq!(Err(Failure::EmptyKey), table.try_put("", 3));
    ///
    /// assert_eq!(1, table.len());
    /// ```
    pub fn try_put<K>(&mut self, key: K, value: V) -> Result<Option<V>>
    where
        K: Into<String>,
    {
        let key = key.into();

        if key.is_empty() {
            trace!("Rejecting empty key");
            return Err(Failure::EmptyKey);
        }

        if self.capacity.should_grow(self.size) {
            self.try_grow()?;
        }

        let overwritten = self.slots.insert(key, value, self.capacity, &self.hooks);

        if overwritten.is_none() {
            self.size = Size(self.size.0 + 1);
        }

        Ok(overwritten)
    }

    /// Inserts a key-value pair into the table.
    ///
    /// Returns `true` if the pair was inserted, or overwrote the value of the
    /// key, and `false` if the key is empty.
    ///
    /// #   Panics
    ///
    /// Panics if the table needs to grow, and its next capacity overflows.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use closed_hash::hashtable::HashTable;
    /// let mut table = HashTable::new();
    ///
    /// assert!(table.put("a", 1));
    /// assert!(table.put("a", 2));
    /// assert!(!table.put("", 3));
    ///
    /// assert_eq!(1, table.len());
    /// assert_eq!(Some(&2), table.get("a"));
    /// ```
    pub fn put<K>(&mut self, key: K, value: V) -> bool
    where
        K: Into<String>,
    {
        match self.try_put(key, value) {
            Ok(_) => true,
            Err(Failure::EmptyKey) => false,
            Err(failure) => panic_from_failure(failure),
        }
    }

    //  Grows the table to its next capacity, moving all entries over.
    fn try_grow(&mut self) -> Result<()> {
        let capacity = self.capacity.grow().ok_or(Failure::CapacityOverflow)?;

        debug!(
            "Growing from {} to {} slots, with {} elements and {} tombstones",
            self.capacity.slots(),
            capacity.slots(),
            self.size.0,
            self.slots.tombstones(),
        );

        let slots = mem::take(&mut self.slots);

        self.slots = slots.rehash(capacity, &self.hooks);
        self.capacity = capacity;

        Ok(())
    }
}

impl<V, H: HashHooks + Default> Default for HashTable<V, H> {
    fn default() -> Self { Self::with_hooks(H::default()) }
}

/// Renders the entries in slot order, as `{k1: v1, k2: v2}`.
impl<V: fmt::Display, H: HashHooks> fmt::Display for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }

        write!(f, "}}")
    }
}

impl<V: fmt::Debug, H: HashHooks> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity.slots())
            .field("size", &self.size.0)
            .field("threshold", &self.capacity.threshold())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

/// Two tables are equal if they hold the same key-value pairs, regardless of
/// their capacity or layout.
impl<V: PartialEq, H: HashHooks> PartialEq for HashTable<V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq, H: HashHooks> Eq for HashTable<V, H> {}

impl<'a, V, H: HashHooks> IntoIterator for &'a HashTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = KeyValueIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Pairs with an empty key are skipped.
impl<K, V, H> iter::Extend<(K, V)> for HashTable<V, H>
where
    K: Into<String>,
    H: HashHooks,
{
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = (K, V)>
    {
        for (key, value) in collection {
            self.put(key, value);
        }
    }
}

/// Pairs with an empty key are skipped.
impl<K, V, H> iter::FromIterator<(K, V)> for HashTable<V, H>
where
    K: Into<String>,
    H: HashHooks + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = (K, V)>
    {
        let mut result = HashTable::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

//
//  Implementation Details
//

struct DebugEntries<'a, V, H: HashHooks>(&'a HashTable<V, H>);

impl<'a, V: fmt::Debug, H: HashHooks> fmt::Debug for DebugEntries<'a, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cfg(test)]
mod tests {

use super::*;

use crate::hashcore::capacity::is_prime;
use crate::utils::tester::*;

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key-{}", i)).collect()
}

#[test]
fn new_defaults() {
    let table: HashTable<i32> = HashTable::new();

    assert_eq!(17, table.capacity());
    assert_eq!(0.75, table.load_factor());
    assert_eq!(12, table.threshold());
    assert!(table.is_empty());
}

#[test]
fn new_zero_zero() {
    let table: HashTable<i32> = HashTable::with_capacity_and_load_factor(0, 0.0);

    assert_eq!(17, table.capacity());
    assert_eq!(0.75, table.load_factor());
    assert_eq!(12, table.threshold());
}

#[test]
fn capacity_always_prime() {
    for requested in 1..200 {
        let table: HashTable<i32> = HashTable::with_capacity_and_load_factor(requested, 0.75);
        let capacity = table.capacity();

        assert!(is_prime(capacity), "{} -> {}", requested, capacity);
        assert!(capacity >= requested);
        assert!((requested..capacity).all(|n| !is_prime(n)), "{} -> {}", requested, capacity);
    }
}

#[test]
fn put_get_round_trip() {
    let mut table = HashTable::new();

    for (i, key) in keys(100).iter().enumerate() {
        assert!(table.put(key.as_str(), i));
    }

    for (i, key) in keys(100).iter().enumerate() {
        assert_eq!(Some(&i), table.get(key), "{}", key);
    }

    assert_eq!(100, table.len());
}

#[test]
fn put_overwrite() {
    let mut table = HashTable::new();

    table.put("k", 1);
    table.put("k", 2);

    assert_eq!(1, table.len());
    assert_eq!(Some(&2), table.get("k"));
}

#[test]
fn put_empty_key() {
    let mut table = HashTable::new();
    table.put("a", 1);

    assert!(!table.put("", 2));
    assert!(!table.put(String::new(), 2));

    assert_eq!(1, table.len());
    assert_eq!(None, table.get(""));
    assert_eq!(vec![("a", &1)], table.iter().collect::<Vec<_>>());
}

#[test]
fn remove_then_get() {
    let mut table = HashTable::new();
    table.put("a", 1);
    table.put("b", 2);

    assert!(table.remove("a"));

    assert_eq!(None, table.get("a"));
    assert_eq!(1, table.len());
    assert!(!table.remove("a"));
    assert_eq!(1, table.len());
}

#[test]
fn tombstone_keeps_chain() {
    //  "a" is 97 and "r" is 114, both 12 modulo 17.
    let mut table = HashTable::new();

    table.put("a", 1);
    table.put("r", 2);

    assert!(table.remove("a"));

    assert_eq!(Some(&2), table.get("r"));
    assert!(table.contains_key("r"));
}

#[test]
fn tombstone_keeps_chain_colliding() {
    let mut table = HashTable::with_hooks(CollidingHooks(5));

    for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
        table.put(*key, i);
    }

    assert!(table.remove("b"));
    assert!(table.remove("c"));

    assert_eq!(Some(&0), table.get("a"));
    assert_eq!(Some(&3), table.get("d"));

    //  Overwriting "d" must not resurrect it in a tombstone.
    table.put("d", 30);
    assert_eq!(2, table.len());
    assert_eq!(vec![0, 30], table.values().copied().collect::<Vec<_>>());
}

#[test]
fn resize_concrete_scenario() {
    initialize_logger();

    let mut table = HashTable::with_capacity_and_load_factor(0, 0.0);
    let keys = keys(13);

    for (i, key) in keys.iter().take(12).enumerate() {
        table.put(key.as_str(), i);
    }

    assert_eq!(17, table.capacity());
    assert_eq!(12, table.len());

    table.put(keys[12].as_str(), 12);

    assert_eq!(37, table.capacity());
    assert_eq!(27, table.threshold());
    assert_eq!(13, table.len());

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(Some(&i), table.get(key), "{}", key);
    }
}

#[test]
fn resize_triggered_on_overwrite() {
    let mut table = HashTable::with_capacity_and_load_factor(5, 0.5);

    table.put("a", 1);
    table.put("b", 2);
    assert_eq!(5, table.capacity());

    //  At the threshold, even an overwrite grows the table first.
    table.put("a", 10);

    assert_eq!(11, table.capacity());
    assert_eq!(2, table.len());
    assert_eq!(Some(&10), table.get("a"));
}

#[test]
fn resize_drops_tombstones() {
    //  11 slots, threshold 5: "a" is at 9, "b" at 10, "c" at 0, "d" at 1...
    let mut table = HashTable::with_capacity_and_load_factor(11, 0.5);

    for key in ["a", "b", "c", "d"] {
        table.put(key, ());
    }
    table.remove("a");

    table.put("e", ());
    table.put("f", ());

    assert_eq!(5, table.len());
    assert_eq!(11, table.capacity());
    assert_eq!(1, table.slots.tombstones());

    table.put("g", ());

    assert_eq!(23, table.capacity());
    assert_eq!(0, table.slots.tombstones());
    assert_eq!(6, table.len());
    assert!(!table.contains_key("a"));
}

#[test]
fn resize_lays_out_new_capacity() {
    let mut table = HashTable::with_capacity_and_load_factor(5, 0.5);

    for key in ["a", "b", "c"] {
        table.put(key, ());
    }

    assert_eq!(11, table.capacity());
    assert_eq!(11, table.slots.slots().count());
    //  "c" wraps around to slot 0, ahead of "a" and "b" at 9 and 10.
    assert_eq!(vec!["c", "a", "b"], table.keys().collect::<Vec<_>>());
}

#[test]
fn tiny_load_factor() {
    let mut table = HashTable::with_capacity_and_load_factor(2, 0.1);
    assert_eq!(0, table.threshold());

    table.put("a", 1);
    table.put("b", 2);

    assert_eq!(Some(&1), table.get("a"));
    assert_eq!(Some(&2), table.get("b"));
    assert!(table.capacity() > 2);
}

#[test]
fn churn_without_growth() {
    let mut table = HashTable::with_capacity_and_load_factor(7, 0.75);

    //  Size never exceeds 1, so tombstones accumulate in every slot.
    for key in keys(50) {
        table.put(key.as_str(), 0);
        assert!(table.remove(&key));
    }

    assert_eq!(7, table.capacity());
    assert!(table.is_empty());
    assert_eq!(None, table.get("absent"));

    table.put("present", 1);
    assert_eq!(Some(&1), table.get("present"));
}

#[test]
fn clear() {
    let mut table = HashTable::new();
    for key in keys(20) {
        table.put(key, 1);
    }
    let capacity = table.capacity();
    let threshold = table.threshold();

    table.clear();

    assert!(table.is_empty());
    assert_eq!(capacity, table.capacity());
    assert_eq!(threshold, table.threshold());
    assert_eq!(0, table.iter().count());
    assert_eq!(None, table.get("key-0"));
}

#[test]
fn drop_values() {
    let count = SpyCount::zero();

    {
        let mut table = HashTable::new();

        table.put("a", SpyElement::new(&count));
        table.put("b", SpyElement::new(&count));
        table.put("c", SpyElement::new(&count));
        assert_eq!(3, count.get());

        //  Overwritten values are dropped.
        table.put("a", SpyElement::new(&count));
        assert_eq!(3, count.get());

        table.remove("b");
        assert_eq!(2, count.get());

        let taken = table.take("c");
        assert_eq!(2, count.get());
        drop(taken);
        assert_eq!(1, count.get());

        table.clear();
        assert_eq!(0, count.get());

        table.put("d", SpyElement::new(&count));
        assert_eq!(1, count.get());
    }

    assert_eq!(0, count.get());
}

#[test]
fn try_put_failures() {
    let mut table = HashTable::new();

    assert_eq!(Err(Failure::EmptyKey), table.try_put("", 1));
    assert_eq!(Ok(None), table.try_put("a", 1));
    assert_eq!(Ok(Some(1)), table.try_put("a", 2));
}

#[test]
fn keys_values_slot_order() {
    let mut table = HashTable::new();

    //  Slots 14, 12, 13.
    table.put("c", 3);
    table.put("a", 1);
    table.put("b", 2);

    assert_eq!(vec!["a", "b", "c"], table.keys().collect::<Vec<_>>());
    assert_eq!(vec![1, 2, 3], table.values().copied().collect::<Vec<_>>());
}

#[test]
fn trait_display() {
    let mut table = HashTable::new();
    assert_eq!("{}", table.to_string());

    table.put("a", 1);
    assert_eq!("{a: 1}", table.to_string());

    table.put("c", 3);
    table.put("b", 2);
    assert_eq!("{a: 1, b: 2, c: 3}", table.to_string());

    table.remove("b");
    assert_eq!("{a: 1, c: 3}", table.to_string());
}

#[test]
fn trait_debug() {
    let mut table = HashTable::new();
    table.put("a", 1);

    assert_eq!(
        "HashTable { capacity: 17, size: 1, threshold: 12, entries: {\"a\": 1} }",
        format!("{:?}", table)
    );
}

#[test]
fn trait_eq() {
    let left: HashTable<_> = [("a", 1), ("b", 2)].iter().copied().collect();
    let mut right = HashTable::with_capacity_and_load_factor(101, 0.5);
    right.put("b", 2);
    right.put("a", 1);

    assert_eq!(left, right);

    right.put("a", 3);
    assert_ne!(left, right);
}

#[test]
fn trait_clone() {
    let mut table = HashTable::new();
    table.put("a", String::from("x"));

    let mut clone = table.clone();
    clone.put("a", String::from("y"));

    assert_eq!(Some(&String::from("x")), table.get("a"));
    assert_eq!(Some(&String::from("y")), clone.get("a"));
}

#[test]
fn trait_from_iterator() {
    let table: HashTable<_> = vec![("a", 1), ("", 2), ("b", 3)].into_iter().collect();

    assert_eq!(2, table.len());
    assert_eq!(None, table.get(""));
}

#[test]
fn trait_send() {
    fn ensure_send<T: Send>(_: T) {}

    let mut table = HashTable::new();
    table.put("Hello", "World");

    ensure_send(table);
}

}   //  mod tests
