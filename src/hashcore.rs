//! Internal definition of the HashTable slots.

pub mod capacity;
pub mod slots;

mod hooks;
mod slot;

pub use self::hooks::{DefaultHashHooks, HashHooks};

use super::root;
