//! #   The Sets.
//!
//! The `Set` trait is the membership contract shared by the set containers of
//! this library:
//!
//! -   The `ListSet`: backed by a `Vec`, requiring only `PartialEq` elements,
//!     and preserving insertion order.
//! -   The `MapSet`: backed by the standard `HashSet`, requiring `Eq + Hash`
//!     elements. Only available with the `with-std` feature.
//!
//! On top of membership, the trait provides the usual set algebra, each
//! operation producing a new set.
//!
//! #   Example: basic
//!
//! ```
//! use closed_hash::set::{ListSet, Set};
//!
//! let mut set = ListSet::new();
//! assert!(set.add(1));
//! assert!(set.add(2));
//! assert!(!set.add(1));
//!
//! assert_eq!(2, set.len());
//! assert!(set.contains(&1));
//!
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1));
//!
//! assert_eq!("Set: {2}", set.to_string());
//! ```
//!
//! #   Example: set algebra
//!
//! ```
//! use closed_hash::set::{ListSet, Set};
//!
//! let left: ListSet<_> = [1, 2, 3].iter().copied().collect();
//! let right: ListSet<_> = [2, 3, 4].iter().copied().collect();
//!
//! assert_eq!(vec![1, 2, 3, 4], left.union(&right).values());
//! assert_eq!(vec![2, 3], left.intersection(&right).values());
//! assert_eq!(vec![1], left.difference(&right).values());
//! assert_eq!(vec![1, 4], left.symmetric_difference(&right).values());
//! ```

mod listset;
mod set;

#[cfg(feature = "with-std")]
mod mapset;

pub use self::listset::ListSet;
pub use self::set::{dedup, intersect_all, Set};

#[cfg(feature = "with-std")]
pub use self::mapset::MapSet;

use super::root;
