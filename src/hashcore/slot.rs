//! Internal slot of the HashTable.

use super::root::{fmt, mem, string::String};

//  The actual key-value pair stored in a HashTable.
#[derive(Clone)]
pub struct Entry<V> {
    //  The key, never empty.
    pub key: String,
    //  The value.
    pub value: V,
}

impl<V> Entry<V> {
    //  Creates a new instance.
    pub fn new(key: String, value: V) -> Self {
        debug_assert!(!key.is_empty());
        Entry { key, value }
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} => {:?}", self.key, self.value)
    }
}

impl<V: PartialEq> PartialEq for Entry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key) && self.value.eq(&other.value)
    }
}

//  The state of a single slot.
//
//  A Tombstone marks a slot whose entry was removed: unlike Empty, it does not
//  terminate a probe sequence, as other keys may have probed past it.
#[derive(Clone)]
pub enum Slot<V> {
    //  Never occupied since the last clear or resize.
    Empty,
    //  Holding a live entry.
    Occupied(Entry<V>),
    //  Occupied, then removed.
    Tombstone,
}

impl<V> Slot<V> {
    //  Checks whether the slot is empty, or not.
    pub fn is_empty(&self) -> bool { matches!(self, Slot::Empty) }

    //  Checks whether the slot is a tombstone, or not.
    pub fn is_tombstone(&self) -> bool { matches!(self, Slot::Tombstone) }

    //  Returns the entry, if occupied.
    pub fn occupied(&self) -> Option<&Entry<V>> {
        if let Slot::Occupied(e) = self {
            Some(e)
        } else {
            None
        }
    }

    //  Returns the entry, if occupied.
    pub fn occupied_mut(&mut self) -> Option<&mut Entry<V>> {
        if let Slot::Occupied(e) = self {
            Some(e)
        } else {
            None
        }
    }

    //  Checks whether the slot holds the key.
    #[cfg(test)]
    pub fn holds(&self, key: &str) -> bool {
        self.occupied().map(|e| e.key == key).unwrap_or(false)
    }

    //  Stores the entry, returning the previous state.
    pub fn set(&mut self, entry: Entry<V>) -> Slot<V> {
        mem::replace(self, Slot::Occupied(entry))
    }

    //  Removes the entry, if any, leaving a Tombstone in its place.
    //
    //  An Empty slot is left Empty.
    pub fn take(&mut self) -> Option<Entry<V>> {
        if self.occupied().is_none() {
            return None;
        }

        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}

impl<V> Default for Slot<V> {
    fn default() -> Self { Slot::Empty }
}

impl<V: fmt::Debug> fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "_"),
            Slot::Occupied(e) => write!(f, "{:?}", e),
            Slot::Tombstone => write!(f, "X"),
        }
    }
}
