//! #   Dictionary exercises.
//!
//! A handful of classic exercises, solved by using the `HashTable` as a plain
//! key-value store.
//!
//! #   Example
//!
//! ```
//! use closed_hash::dictionary;
//! use closed_hash::hashtable::HashTable;
//!
//! let mut dictionary = HashTable::new();
//! dictionary.put("Dungeons", String::from("Calabozos"));
//! dictionary.put("Dragons", String::from("Dragones"));
//!
//! assert_eq!("Calabozos error Dragones", dictionary::translate("Dungeons & Dragons", &dictionary));
//! ```

use super::root::{string::String, vec::Vec};

use super::hashtable::{HashHooks, HashTable};

/// The translation of words absent from the dictionary.
pub const UNKNOWN_WORD: &str = "error";

/// Translates a phrase, word by word.
///
/// Words are separated by whitespace, and joined back with a single space.
/// A word absent from the dictionary is translated as `UNKNOWN_WORD`.
///
/// #   Example
///
/// ```
/// #   use closed_hash::dictionary::translate;
/// #   use closed_hash::hashtable::HashTable;
/// let dictionary: HashTable<_> = [("Dungeons", String::from("Calabozos"))].into_iter().collect();
///
/// assert_eq!("Calabozos", translate("Dungeons", &dictionary));
/// assert_eq!("error", translate("Dwarf", &dictionary));
/// assert_eq!("", translate("", &dictionary));
/// ```
pub fn translate<H>(phrase: &str, dictionary: &HashTable<String, H>) -> String
where
    H: HashHooks,
{
    let words: Vec<&str> = phrase
        .split_whitespace()
        .map(|word| dictionary.get(word).map(String::as_str).unwrap_or(UNKNOWN_WORD))
        .collect();

    words.join(" ")
}

/// Counts the occurrences of each character of `text`, whitespace excluded.
///
/// #   Example
///
/// ```
/// #   use closed_hash::dictionary::letter_frequency;
/// let frequency = letter_frequency("ahora");
///
/// assert_eq!(4, frequency.len());
/// assert_eq!(Some(&2), frequency.get("a"));
/// assert_eq!(Some(&1), frequency.get("h"));
/// ```
pub fn letter_frequency(text: &str) -> HashTable<usize> {
    let mut result = HashTable::new();

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        let mut buffer = [0; 4];
        let key: &str = c.encode_utf8(&mut buffer);

        match result.get_mut(key) {
            Some(count) => *count += 1,
            None => { result.put(key, 1); },
        }
    }

    result
}

/// Returns the elements of `first` which also appear in `second`, without
/// repetitions, in order of first occurrence in `first`.
///
/// Empty strings are never part of the result.
///
/// #   Example
///
/// ```
/// #   use closed_hash::dictionary::intersection;
/// assert_eq!(vec!["A"], intersection(&["A", "B", "C", "A"], &["A", "D", "E"]));
/// assert!(intersection(&["A", "B"], &["C", "D"]).is_empty());
/// ```
pub fn intersection<S>(first: &[S], second: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    let lookup: HashTable<()> = second.iter().map(|e| (e.as_ref(), ())).collect();
    let mut seen: HashTable<()> = HashTable::new();

    first.iter()
        .map(AsRef::as_ref)
        .filter(|e| lookup.contains_key(e))
        .filter(|e| seen.try_put(*e, ()) == Ok(None))
        .map(String::from)
        .collect()
}

/// Inverts a schedule, mapping each time slot to its attendees, into a table
/// mapping each attendee to its time slots.
///
/// The time slots of an attendee are listed in the iteration order of
/// `schedule`.
///
/// #   Example
///
/// ```
/// #   use closed_hash::dictionary::invert_schedule;
/// #   use closed_hash::hashtable::HashTable;
/// let mut schedule = HashTable::new();
/// schedule.put("Wed 10", vec![String::from("Ana"), String::from("Pedro")]);
/// schedule.put("Fri 12", vec![String::from("Ana")]);
///
/// let attendees = invert_schedule(&schedule);
///
/// assert_eq!(2, attendees.len());
/// assert_eq!(Some(&vec![String::from("Wed 10")]), attendees.get("Pedro"));
/// assert_eq!(Some(2), attendees.get("Ana").map(Vec::len));
/// ```
pub fn invert_schedule<H>(schedule: &HashTable<Vec<String>, H>) -> HashTable<Vec<String>>
where
    H: HashHooks,
{
    let mut result: HashTable<Vec<String>> = HashTable::new();

    for (slot, attendees) in schedule {
        for attendee in attendees {
            match result.get_mut(attendee) {
                Some(slots) => slots.push(String::from(slot)),
                None => { result.put(attendee.as_str(), Vec::from([String::from(slot)])); },
            }
        }
    }

    result
}

//  mod tests
