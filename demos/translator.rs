//! A word-by-word translator.
//!
//! Reads phrases from the command line, or uses a few defaults, and translates them from English to Spanish,
//! then displays the letter frequency of the translation.
//!
//! Unknown words are translated as "error".

extern crate closed_hash;
extern crate env_logger;

use std::env;

use closed_hash::dictionary::{letter_frequency, translate};
use closed_hash::hashtable::HashTable;

const VOCABULARY: [(&str, &str); 8] = [
    ("Dungeons", "Calabozos"),
    ("Dragons", "Dragones"),
    ("and", "y"),
    ("the", "el"),
    ("dwarf", "enano"),
    ("sleeps", "duerme"),
    ("today", "hoy"),
    ("is", "es"),
];

fn main() {
    env_logger::init();

    let dictionary: HashTable<String> = VOCABULARY
        .iter()
        .map(|(english, spanish)| (*english, spanish.to_string()))
        .collect();

    println!("Dictionary - {}", dictionary);

    let mut phrases: Vec<String> = env::args().skip(1).collect();

    if phrases.is_empty() {
        phrases = vec![
            "Dungeons & Dragons".to_string(),
            "the dwarf sleeps".to_string(),
            "today is Monday".to_string(),
        ];
    }

    for phrase in &phrases {
        let translation = translate(phrase, &dictionary);
        let frequency = letter_frequency(&translation);

        println!("{} => {}", phrase, translation);
        println!("    {}", frequency);
    }
}
