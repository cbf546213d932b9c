//! Hooks of the HashTable.

/// HashHooks
///
/// The hashing algorithm of a `HashTable`, mapping a key to the index of its home slot, modulo the number of slots.
///
/// Keys are hashed by value only, with no per-instance seed: two tables built with the same hooks, and the same
/// sequence of operations, lay out their slots identically.
///
/// Also see DefaultHashHooks for the default polynomial hash.
pub trait HashHooks {
    /// Hashes the key.
    fn hash(&self, key: &str) -> usize;
}

/// DefaultHashHooks
///
/// Default hooks for the HashTable: a polynomial hash in base 11.
///
/// For a key of length `l` (in bytes), whose character starting at byte `i` has code `c(i)`, the hash is the sum of
/// `c(i) * 11^(l - i - 1)`, wrapping around on overflow.
///
/// #   Example
///
/// ```
/// use closed_hash::hashtable::{DefaultHashHooks, HashHooks};
///
/// let hooks = DefaultHashHooks::default();
///
/// assert_eq!(0, hooks.hash(""));
/// assert_eq!(97, hooks.hash("a"));
/// assert_eq!(97 * 11 + 98, hooks.hash("ab"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DefaultHashHooks;

impl HashHooks for DefaultHashHooks {
    fn hash(&self, key: &str) -> usize {
        let length = key.len();

        key.char_indices().fold(0usize, |hash, (index, c)| {
            //  `index` is a byte offset, hence `length - index - 1` cannot underflow.
            let exponent = (length - index - 1) as u32;
            let power = BASE.wrapping_pow(exponent);

            hash.wrapping_add((c as usize).wrapping_mul(power))
        })
    }
}

//
//  Implementation Details
//

//  The base of the polynomial hash.
const BASE: usize = 11;
