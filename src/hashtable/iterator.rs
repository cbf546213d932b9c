//! Various iterators over the HashTable.
//!
//! All iterators yield entries in slot order, which is neither insertion
//! order, nor sorted order, and changes whenever the table grows.

use super::root::iter;

use super::hashcore::slots::{EntryIterator, EntryIteratorMut};

/// An iterator over the keys of a `HashTable`.
pub struct KeyIterator<'a, V>(EntryIterator<'a, V>);

impl<'a, V> KeyIterator<'a, V> {
    pub(crate) fn create(iterator: EntryIterator<'a, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, V> Clone for KeyIterator<'a, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, V> iter::Iterator for KeyIterator<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(|e| e.key.as_str())
    }
}

/// An iterator over the values of a `HashTable`.
pub struct ValueIterator<'a, V>(EntryIterator<'a, V>);

impl<'a, V> ValueIterator<'a, V> {
    pub(crate) fn create(iterator: EntryIterator<'a, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, V> Clone for ValueIterator<'a, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, V> iter::Iterator for ValueIterator<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|e| &e.value)
    }
}

/// A mutable iterator over the values of a `HashTable`.
pub struct ValueIteratorMut<'a, V>(EntryIteratorMut<'a, V>);

impl<'a, V> ValueIteratorMut<'a, V> {
    pub(crate) fn create(iterator: EntryIteratorMut<'a, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, V> iter::Iterator for ValueIteratorMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.0.next().map(|e| &mut e.value)
    }
}

/// An iterator over the key-value pairs of a `HashTable`.
pub struct KeyValueIterator<'a, V>(EntryIterator<'a, V>);

impl<'a, V> KeyValueIterator<'a, V> {
    pub(crate) fn create(iterator: EntryIterator<'a, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, V> Clone for KeyValueIterator<'a, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, V> iter::Iterator for KeyValueIterator<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| (e.key.as_str(), &e.value))
    }
}
