//! The Failure and Result types of this library.
//!
//! Looking up or removing a key which is not present is not a failure, and is
//! reported through `Option` or `bool` instead. A `Failure` is only ever
//! produced when an insertion cannot proceed.
//!
//! Faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and reports invalid keys as `false`, panicking
//!     only on capacity overflow.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The next capacity cannot be calculated due to overflowing.
    CapacityOverflow,
    /// The empty string is not a valid key.
    EmptyKey,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("EmptyKey", format!("{}", Failure::EmptyKey));
        assert_eq!("CapacityOverflow", format!("{}", Failure::CapacityOverflow));
    }

    #[test]
    fn failure_ordering() {
        assert!(Failure::CapacityOverflow < Failure::EmptyKey);
    }
}
