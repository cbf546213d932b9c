//! The MapSet.

use std::collections::{hash_set, HashSet};

use super::root::{fmt, hash, iter, vec::Vec};

use super::set::{self, Set};

/// `MapSet`
///
/// A set backed by the standard `HashSet`, in unspecified order.
#[derive(Clone, Debug)]
pub struct MapSet<T>(HashSet<T>);

impl<T> MapSet<T> {
    /// Creates a new, empty, instance.
    pub fn new() -> Self { Self(HashSet::new()) }

    /// Returns an iterator over the elements, in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> { self.0.iter() }
}

impl<T: Eq + hash::Hash + Clone> Set<T> for MapSet<T> {
    fn contains(&self, element: &T) -> bool { self.0.contains(element) }

    fn add(&mut self, element: T) -> bool { self.0.insert(element) }

    fn remove(&mut self, element: &T) -> bool { self.0.remove(element) }

    fn len(&self) -> usize { self.0.len() }

    fn values(&self) -> Vec<T> { self.0.iter().cloned().collect() }
}

impl<T> Default for MapSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Display> fmt::Display for MapSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        set::display(f, self.iter())
    }
}

impl<T: Eq + hash::Hash> iter::Extend<T> for MapSet<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        self.0.extend(collection);
    }
}

impl<T: Eq + hash::Hash> iter::FromIterator<T> for MapSet<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result = MapSet::new();
        result.extend(collection);
        result
    }
}

impl<'a, T> IntoIterator for &'a MapSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {

use super::*;

fn sorted(set: &MapSet<i32>) -> Vec<i32> {
    let mut values = set.values();
    values.sort_unstable();
    values
}

#[test]
fn new() {
    let set: MapSet<i32> = MapSet::new();

    assert_eq!(0, set.len());
    assert!(set.is_empty());
}

#[test]
fn add_contains_remove() {
    let mut set = MapSet::new();

    assert!(set.add(1));
    assert!(set.add(2));
    assert!(!set.add(1));
    assert_eq!(2, set.len());

    assert!(set.contains(&1));
    assert!(!set.contains(&3));

    assert!(set.remove(&1));
    assert!(!set.remove(&1));
    assert_eq!(vec![2], sorted(&set));
}

#[test]
fn algebra() {
    let left: MapSet<_> = [1, 2, 3].iter().copied().collect();
    let right: MapSet<_> = [3, 4].iter().copied().collect();

    assert_eq!(vec![1, 2, 3, 4], sorted(&left.union(&right)));
    assert_eq!(vec![3], sorted(&left.intersection(&right)));
    assert_eq!(vec![1, 2], sorted(&left.difference(&right)));
    assert_eq!(vec![1, 2, 4], sorted(&left.symmetric_difference(&right)));
    assert!(left.set_eq(&[3, 2, 1].iter().copied().collect()));
}

#[test]
fn trait_display() {
    let mut set = MapSet::new();
    assert_eq!("Set: {}", set.to_string());

    set.add(1);
    set.add(2);

    let rendered = set.to_string();
    assert!(rendered == "Set: {1, 2}" || rendered == "Set: {2, 1}", "{}", rendered);
}

}   //  mod tests
