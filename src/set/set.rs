//! The Set trait, and the operations built upon it.

use super::root::{fmt, iter, vec::Vec};

use super::listset::ListSet;

/// `Set`
///
/// A collection of distinct elements.
///
/// Only the membership operations are required; the set algebra is derived
/// from them, and from collecting into a fresh set.
pub trait Set<T>: Default + iter::FromIterator<T> {
    /// Returns `true` if the set contains the element.
    fn contains(&self, element: &T) -> bool;

    /// Adds the element to the set.
    ///
    /// Returns `false`, leaving the set unchanged, if the element was already
    /// present.
    fn add(&mut self, element: T) -> bool;

    /// Removes the element from the set.
    ///
    /// Returns `false` if the element was not present.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns the number of elements of the set.
    fn len(&self) -> usize;

    /// Returns whether the set contains any element, or not.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns a copy of the elements of the set.
    fn values(&self) -> Vec<T>;

    /// Returns the elements in either set.
    fn union(&self, other: &Self) -> Self {
        let mut result: Self = self.values().into_iter().collect();

        for element in other.values() {
            result.add(element);
        }

        result
    }

    /// Returns the elements in both sets.
    fn intersection(&self, other: &Self) -> Self {
        self.values().into_iter().filter(|e| other.contains(e)).collect()
    }

    /// Returns the elements of this set which are not in `other`.
    fn difference(&self, other: &Self) -> Self {
        self.values().into_iter().filter(|e| !other.contains(e)).collect()
    }

    /// Returns the elements in exactly one of the sets.
    fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Returns `true` if all elements of this set are in `other`.
    fn is_subset(&self, other: &Self) -> bool {
        self.values().iter().all(|e| other.contains(e))
    }

    /// Returns `true` if all elements of `other` are in this set.
    fn is_superset(&self, other: &Self) -> bool { other.is_subset(self) }

    /// Returns `true` if both sets hold the same elements, in any order.
    fn set_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

/// Returns the elements common to `first` and all of `rest`.
///
/// The intersection of a single set, with no other, is empty.
///
/// #   Example
///
/// ```
/// #   use closed_hash::set::{intersect_all, ListSet, Set};
/// let first: ListSet<_> = [1, 2, 3].iter().copied().collect();
/// let rest: Vec<ListSet<_>> = vec![
///     [2, 3].iter().copied().collect(),
///     [2].iter().copied().collect(),
/// ];
///
/// assert_eq!(vec![2], intersect_all(&first, &rest).values());
/// assert!(intersect_all(&first, &[]).is_empty());
/// ```
pub fn intersect_all<T, S>(first: &S, rest: &[S]) -> S
where
    S: Set<T>,
{
    let (head, tail) = match rest.split_first() {
        Some(split) => split,
        None => return S::default(),
    };

    tail.iter().fold(first.intersection(head), |acc, set| acc.intersection(set))
}

/// Returns the elements, without repetitions, in order of first occurrence.
///
/// #   Example
///
/// ```
/// #   use closed_hash::set::dedup;
/// assert_eq!(vec![1, 2, 7, 3], dedup(&[1, 2, 7, 2, 1, 3]));
/// ```
pub fn dedup<T>(elements: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let set: ListSet<T> = elements.iter().cloned().collect();
    set.values()
}

//  Renders the elements as `Set: {e1, e2}`.
pub(crate) fn display<T, I>(f: &mut fmt::Formatter, elements: I) -> fmt::Result
where
    T: fmt::Display,
    I: IntoIterator<Item = T>,
{
    write!(f, "Set: {{")?;

    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", element)?;
    }

    write!(f, "}}")
}

//  mod tests
