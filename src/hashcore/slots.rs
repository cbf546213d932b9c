//! The slot array underlying the HashTable, and its linear probing.

use super::root::{iter, mem, slice, string::String, vec::Vec};

use super::capacity::{Capacity, Hash, SlotIndex};
use super::hooks::HashHooks;
use super::slot::{Entry, Slot};

//  The storage.
//
//  Invariants:
//  -   The number of slots matches the number of slots of the `Capacity` it
//      was created with.
//  -   A key occupies at most one slot.
#[derive(Clone)]
pub struct SlotArray<V>(Vec<Slot<V>>);

impl<V> SlotArray<V> {
    //  Creates an instance, with all slots empty.
    pub fn new(capacity: Capacity) -> Self {
        let slots = iter::repeat_with(Slot::default)
            .take(capacity.slots())
            .collect();
        Self(slots)
    }

    //  Returns the number of tombstones.
    pub fn tombstones(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_tombstone()).count()
    }

    //  Clears the slots, marking all of them empty.
    pub fn clear(&mut self) {
        for slot in self.0.iter_mut() {
            *slot = Slot::Empty;
        }
    }

    //  Gets the entry whose key matches.
    pub fn get<H>(&self, key: &str, capacity: Capacity, hooks: &H) -> Option<&Entry<V>>
    where
        H: HashHooks,
    {
        match self.probe(key, capacity, hooks) {
            Probe::Occupied(index) => self.0[index.0].occupied(),
            _ => None,
        }
    }

    //  Gets the entry whose key matches.
    pub fn get_mut<H>(&mut self, key: &str, capacity: Capacity, hooks: &H)
        -> Option<&mut Entry<V>>
    where
        H: HashHooks,
    {
        match self.probe(key, capacity, hooks) {
            Probe::Occupied(index) => self.0[index.0].occupied_mut(),
            _ => None,
        }
    }

    //  Inserts the entry, or overwrites the value of the entry whose key
    //  matches.
    //
    //  Returns the overwritten value, if any. The caller is responsible for
    //  accounting for the new element when `None` is returned.
    //
    //  The caller is also responsible for ensuring that at least one slot is
    //  not occupied, which growing the table at the threshold guarantees.
    pub fn insert<H>(
        &mut self,
        key: String,
        value: V,
        capacity: Capacity,
        hooks: &H,
    )
        -> Option<V>
    where
        H: HashHooks,
    {
        match self.probe(&key, capacity, hooks) {
            Probe::Occupied(index) => {
                let entry = self.0[index.0].occupied_mut()?;
                Some(mem::replace(&mut entry.value, value))
            },
            Probe::Vacant(index) => {
                self.0[index.0].set(Entry::new(key, value));
                None
            },
            Probe::Exhausted => panic_no_vacant_slot(&key),
        }
    }

    //  Removes the entry whose key matches, leaving a tombstone behind.
    pub fn remove<H>(&mut self, key: &str, capacity: Capacity, hooks: &H)
        -> Option<Entry<V>>
    where
        H: HashHooks,
    {
        match self.probe(key, capacity, hooks) {
            Probe::Occupied(index) => self.0[index.0].take(),
            _ => None,
        }
    }

    //  Moves all entries into a new array of the given capacity.
    //
    //  Tombstones are not carried over.
    pub fn rehash<H>(self, capacity: Capacity, hooks: &H) -> Self
    where
        H: HashHooks,
    {
        let mut result = Self::new(capacity);

        for slot in self.0 {
            if let Slot::Occupied(entry) = slot {
                result.insert_distinct(entry, capacity, hooks);
            }
        }

        result
    }

    //  Returns an iterator over the entries, in slot order.
    pub fn iter(&self) -> EntryIterator<'_, V> { EntryIterator(self.0.iter()) }

    //  Returns an iterator over the entries, in slot order.
    pub fn iter_mut(&mut self) -> EntryIteratorMut<'_, V> {
        EntryIteratorMut(self.0.iter_mut())
    }

    //  Returns an iterator over the slots, in order.
    #[cfg(test)]
    pub fn slots(&self) -> slice::Iter<'_, Slot<V>> { self.0.iter() }

    //  Looks up the key, or where it could be inserted.
    //
    //  Probing starts at the home slot of the key and moves forward one slot
    //  at a time, wrapping around, until:
    //  -   A slot holding the key is found: Occupied.
    //  -   An empty slot is found: Vacant, at the first tombstone encountered
    //      if any, otherwise at the empty slot itself.
    //  -   All slots were visited: Vacant at the first tombstone, if any,
    //      otherwise Exhausted.
    fn probe<H>(&self, key: &str, capacity: Capacity, hooks: &H) -> Probe
    where
        H: HashHooks,
    {
        debug_assert_eq!(self.0.len(), capacity.slots());

        let mut index = capacity.home(Hash(hooks.hash(key)));
        let mut tombstone = None;

        for _ in 0..capacity.slots() {
            let slot = &self.0[index.0];

            match slot {
                Slot::Empty => return Probe::Vacant(tombstone.unwrap_or(index)),
                Slot::Tombstone => { tombstone.get_or_insert(index); },
                Slot::Occupied(entry) if entry.key == key => return Probe::Occupied(index),
                Slot::Occupied(_) => (),
            }

            index = capacity.next(index);
        }

        tombstone.map(Probe::Vacant).unwrap_or(Probe::Exhausted)
    }

    //  Inserts an entry whose key is known not to be present, in the first
    //  empty slot of its probe sequence.
    fn insert_distinct<H>(&mut self, entry: Entry<V>, capacity: Capacity, hooks: &H)
    where
        H: HashHooks,
    {
        let mut index = capacity.home(Hash(hooks.hash(&entry.key)));

        while !self.0[index.0].is_empty() {
            index = capacity.next(index);
        }

        self.0[index.0].set(entry);
    }
}

impl<V> Default for SlotArray<V> {
    //  An array without any slot, only fit as a placeholder.
    fn default() -> Self { Self(Vec::new()) }
}

//  An iterator over the entries of a SlotArray.
pub struct EntryIterator<'a, V>(slice::Iter<'a, Slot<V>>);

impl<'a, V> Clone for EntryIterator<'a, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, V> iter::Iterator for EntryIterator<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(|slot| slot.occupied())
    }
}

//  An iterator over the entries of a SlotArray.
pub struct EntryIteratorMut<'a, V>(slice::IterMut<'a, Slot<V>>);

impl<'a, V> iter::Iterator for EntryIteratorMut<'a, V> {
    type Item = &'a mut Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(|slot| slot.occupied_mut())
    }
}

//
//  Implementation Details
//

#[cold]
#[inline(never)]
fn panic_no_vacant_slot(key: &str) -> ! {
    unreachable!("No vacant slot for {:?}, the table should have grown", key);
}

//  The outcome of probing for a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Probe {
    //  The key was located.
    Occupied(SlotIndex),
    //  The key is absent, and can be inserted here.
    Vacant(SlotIndex),
    //  The key is absent, and there is no room for it.
    Exhausted,
}
