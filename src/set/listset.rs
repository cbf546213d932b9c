//! The ListSet.

use super::root::{fmt, iter, slice, vec::Vec};

use super::set::{self, Set};

/// `ListSet`
///
/// A set backed by a `Vec`, in insertion order.
///
/// Membership is checked linearly, which is only suitable for small sets, but
/// only requires `PartialEq` of the elements.
#[derive(Clone, Debug)]
pub struct ListSet<T>(Vec<T>);

impl<T> ListSet<T> {
    /// Creates a new, empty, instance.
    pub fn new() -> Self { Self(Vec::new()) }

    /// Returns an iterator over the elements, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> { self.0.iter() }
}

impl<T: PartialEq + Clone> Set<T> for ListSet<T> {
    fn contains(&self, element: &T) -> bool { self.0.contains(element) }

    fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }

        self.0.push(element);
        true
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.0.iter().position(|e| e == element) {
            Some(index) => {
                self.0.remove(index);
                true
            },
            None => false,
        }
    }

    fn len(&self) -> usize { self.0.len() }

    fn values(&self) -> Vec<T> { self.0.clone() }
}

impl<T> Default for ListSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Display> fmt::Display for ListSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        set::display(f, self.iter())
    }
}

impl<T: PartialEq + Clone> iter::Extend<T> for ListSet<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        for element in collection {
            self.add(element);
        }
    }
}

impl<T: PartialEq + Clone> iter::FromIterator<T> for ListSet<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result = ListSet::new();
        result.extend(collection);
        result
    }
}

impl<'a, T> IntoIterator for &'a ListSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn new() {
    let set: ListSet<i32> = ListSet::new();

    assert_eq!(0, set.len());
    assert!(set.is_empty());
    assert!(set.values().is_empty());
}

#[test]
fn add() {
    let mut set = ListSet::new();

    assert!(set.add(1));
    assert!(set.add(2));
    assert!(set.add(3));
    assert!(!set.add(1));

    assert_eq!(3, set.len());
    assert_eq!(vec![1, 2, 3], set.values());
}

#[test]
fn contains() {
    let mut set = ListSet::new();
    set.add(1);

    assert!(set.contains(&1));
    assert!(!set.contains(&2));
}

#[test]
fn remove() {
    let mut set: ListSet<_> = [1, 2].iter().copied().collect();

    assert!(set.remove(&1));
    assert!(!set.contains(&1));
    assert_eq!(1, set.len());

    assert!(!set.remove(&7));
    assert_eq!(1, set.len());
}

#[test]
fn non_hashable_elements() {
    let mut set = ListSet::new();

    set.add(0.5);
    set.add(1.5);
    set.add(0.5);

    assert_eq!(2, set.len());
}

#[test]
fn trait_display() {
    let mut set = ListSet::new();
    assert_eq!("Set: {}", set.to_string());

    set.add(1);
    set.add(2);
    assert_eq!("Set: {1, 2}", set.to_string());
}

#[test]
fn trait_extend() {
    let mut set: ListSet<_> = [1, 2].iter().copied().collect();
    set.extend(vec![2, 3, 3]);

    assert_eq!(vec![1, 2, 3], set.values());
}

}   //  mod tests
