//! The Failure and Result types of this library.
//!
//! Any method of the table which may reject its arguments, or may need to
//! grow the table, is faillible. The cause of the error is then represented
//! as a `Failure`.
//!
//! Where a failure is exceptional rather than expected, methods come in two
//! versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! The expected outcomes, a duplicate key on insertion or a missing key on a
//! strict lookup, are always reported through `Result`.

use super::root::{fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, thiserror::Error)]
pub enum Failure {
    /// An argument is outside of its valid domain.
    #[error("InvalidArgument({0})")]
    InvalidArgument(Argument),
    /// The key is already present in the table.
    #[error("DuplicateKey")]
    DuplicateKey,
    /// The key is not present in the table.
    #[error("KeyNotFound")]
    KeyNotFound,
    /// The probe sequence holds neither an empty nor a reusable slot.
    #[error("TableFull")]
    TableFull,
    /// The doubled capacity cannot be represented.
    #[error("CapacityOverflow")]
    CapacityOverflow,
}

/// The argument rejected by `Failure::InvalidArgument`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Argument {
    /// The capacity is 0.
    ZeroCapacity,
    /// The load factor threshold is not within `(0, 1]`.
    LoadFactor,
}

impl fmt::Display for Argument {
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
    assert_eq!("TableFull", format!("{}", Failure::TableFull));
    assert_eq!(
        "InvalidArgument(ZeroCapacity)",
        format!("{}", Failure::InvalidArgument(Argument::ZeroCapacity))
    );
}

#[test]
fn failure_is_error() {
    fn ensure_error<E: std::error::Error>(_: E) {}

    ensure_error(Failure::KeyNotFound);
}

}
