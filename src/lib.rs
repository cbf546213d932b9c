#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Closed Hash Library
//!
//! A closed hash table, and a few companions.
//! -   The `HashTable`: a map from string keys to values, with open addressing
//!     and linear probing.
//! -   The `ListSet` and `MapSet`: sets sharing the `Set` membership contract.
//! -   The `dictionary` exercises, built upon the `HashTable`.
//!
//! Unless the `with-std` feature is active, this crate is `no_std`, only
//! relying on `alloc`.

extern crate alloc;

pub mod dictionary;
pub mod failure;
pub mod hashtable;
pub mod set;

mod hashcore;
mod utils;

use self::utils::root;
