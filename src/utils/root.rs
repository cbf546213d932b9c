//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{fmt, iter, mem, result, slice};

#[cfg(feature = "with-std")]
pub use std::{fmt, hash, iter, mem, result, slice};

pub use alloc::{string, vec};

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
