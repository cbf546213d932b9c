//! #   The HashTable.
//!
//! The `HashTable` is a closed hash table mapping string keys to values of any
//! type.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashTable` is a single array of slots, each either
//! empty, occupied by a key-value pair, or a tombstone left behind by a
//! removal. Collisions are resolved by linear probing: a key lives in the first
//! suitable slot at or after its home slot, wrapping around.
//!
//! The main consequences are:
//!
//! -   The number of slots is always prime, and the table grows to the next
//!     prime at least twice as large whenever its size reaches the threshold
//!     given by its load factor.
//! -   Removal does not shrink the table, and leaves a tombstone which is only
//!     reclaimed by a later insertion or by growth.
//! -   The empty string is not a valid key.
//!
//! #   Example: basic
//!
//! General usage of `HashTable` involves inserting key-value pairs with `put`,
//! which returns whether the pair was stored.
//!
//! The faillible equivalent exists too: `try_put` returns a `Result` holding
//! the overwritten value, if any, or the cause of the failure.
//!
//! ```
//! use closed_hash::failure::Failure;
//! use closed_hash::hashtable::HashTable;
//!
//! let mut table: HashTable<i32> = HashTable::new();
//! assert!(table.put("one", 1));
//! assert!(table.put("two", 2));
//! assert!(!table.put("", 0));
//!
//! assert_eq!(2, table.len());
//! assert_eq!(Some(&1), table.get("one"));
//!
//! assert_eq!(Ok(Some(2)), table.try_put("two", 22));
//! assert_eq!(Err(Failure::EmptyKey), table.try_put("", 0));
//!
//! for (key, value) in &table {
//!     println!("{} => {}", key, value);
//! }
//! ```
//!
//! #   Example: removing elements
//!
//! `remove` reports whether the key was present, while `take` hands back the
//! value.
//!
//! ```
//! use closed_hash::hashtable::HashTable;
//!
//! let mut table: HashTable<_> = [("a", 1), ("b", 2)].iter().copied().collect();
//!
//! assert!(table.remove("a"));
//! assert!(!table.remove("a"));
//! assert_eq!(Some(2), table.take("b"));
//!
//! assert!(table.is_empty());
//! ```
//!
//! #   Example: managing capacity
//!
//! The capacity and load factor are set at construction, and the capacity
//! grows on its own.
//!
//! ```
//! use closed_hash::hashtable::HashTable;
//!
//! //  The capacity requested is rounded-up to the closest prime.
//! let mut table: HashTable<usize> = HashTable::with_capacity_and_load_factor(4, 0.5);
//! assert_eq!(5, table.capacity());
//! assert_eq!(2, table.threshold());
//!
//! for (i, key) in ["a", "b", "c"].iter().enumerate() {
//!     table.put(*key, i);
//! }
//!
//! //  The third insertion found the table at its threshold: 5 * 2 -> 11.
//! assert_eq!(11, table.capacity());
//! assert_eq!(3, table.len());
//! ```
//!
//! #   Example: rendering
//!
//! The `Display` implementation lists the entries in slot order.
//!
//! ```
//! use closed_hash::hashtable::HashTable;
//!
//! let mut table = HashTable::new();
//! assert_eq!("{}", table.to_string());
//!
//! table.put("b", 2);
//! table.put("a", 1);
//!
//! assert_eq!("{a: 1, b: 2}", table.to_string());
//! ```

pub mod iterator;

mod hashtable;

pub use super::hashcore::{DefaultHashHooks, HashHooks};
pub use self::hashtable::HashTable;

use super::failure;
use super::hashcore;
use super::root;
