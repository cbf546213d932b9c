//! A simple shared table example.
//!
//! In this example, there are two threads:
//! -   A Producer thread will intermittently black-list IDs, and lift earlier black-listings.
//! -   A Consumer thread will "model" a continuous stream of messages coming and for each check their sender against
//!     the black-list.
//!
//! The `HashTable` is not concurrent: both threads share it behind a `Mutex`.
//!
//! Run with `RUST_LOG=debug` to see the table grow.

extern crate closed_hash;
extern crate crossbeam_utils;
extern crate env_logger;

use std::{sync::Mutex, thread, time};

use closed_hash::hashtable::HashTable;

const NUMBER_ELEMENTS_PER_BATCH: usize = 10;
const NUMBER_BATCHES: usize = 10;

const PACE_TIME: time::Duration = time::Duration::from_millis(50);

fn is_blacklisted(id: &str, blacklist: &Mutex<HashTable<usize>>) -> bool {
    blacklist.lock().map(|table| table.contains_key(id)).unwrap_or(false)
}

fn main() {
    env_logger::init();

    let blacklist = Mutex::new(HashTable::new());

    crossbeam_utils::thread::scope(|scope| {
        //
        //  Consumer
        //
        scope.spawn(|_| {
            let mut blacklisted = 0;

            for _ in 0..NUMBER_BATCHES {
                //  Simulate continuous stream of messages
                for id in 0..(NUMBER_BATCHES * NUMBER_ELEMENTS_PER_BATCH) {
                    let id = format!("{}", id);

                    if is_blacklisted(&id, &blacklist) {
                        blacklisted += 1;
                    }
                }

                thread::sleep(PACE_TIME);
            }

            println!("Consumer - {} messages black-listed", blacklisted);
        });

        //
        //  Producer
        //
        for i in 0..NUMBER_BATCHES {
            if let Ok(mut table) = blacklist.lock() {
                for j in 0..NUMBER_ELEMENTS_PER_BATCH {
                    let id = i * NUMBER_ELEMENTS_PER_BATCH + j;

                    //  "Randomly" blacklist a few elements
                    if id * 13 % 3 == 0 {
                        table.put(format!("{}", id), i);
                    }
                }

                //  Lift the black-listings of two batches ago.
                let lifted: Vec<String> = table.iter()
                    .filter(|(_, batch)| **batch + 2 <= i)
                    .map(|(id, _)| id.to_string())
                    .collect();

                for id in &lifted {
                    table.remove(id);
                }

                println!(
                    "Producer - batch {}: {} black-listed, {} lifted, {} slots",
                    i,
                    table.len(),
                    lifted.len(),
                    table.capacity()
                );
            }

            thread::sleep(PACE_TIME);
        }
    })
    .unwrap();

    if let Ok(table) = blacklist.into_inner() {
        println!("Final - {}", table);
    }
}
