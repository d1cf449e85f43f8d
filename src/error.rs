//! Error types for the field engine.
//!
//! Most malformed input is dropped silently (control characters, non-digits in
//! numeric fields, overflow of fixed-capacity buffers). The variants here are
//! the conditions a host must actually handle.

use std::fmt;

use crate::panel::FieldId;

/// Result type alias for field engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for field engine operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A growable buffer could not be grown to hold the requested length.
    ///
    /// Fatal: the operation that triggered it has not been applied.
    CapacityExhausted { requested: usize, limit: usize },
    /// A capacity policy was constructed with a zero capacity.
    InvalidCapacity(usize),
    /// A panel operation referenced a field that does not exist.
    UnknownField(FieldId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted { requested, limit } => write!(
                f,
                "cannot grow text buffer to {requested} characters (limit {limit})"
            ),
            Self::InvalidCapacity(cap) => write!(f, "invalid buffer capacity: {cap}"),
            Self::UnknownField(id) => write!(f, "unknown field {id}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CapacityExhausted {
            requested: 2048,
            limit: 1024,
        };
        assert!(err.to_string().contains("2048"));
        assert!(err.to_string().contains("limit 1024"));

        let err = Error::InvalidCapacity(0);
        assert!(err.to_string().contains("invalid buffer capacity"));

        let err = Error::UnknownField(FieldId::from_raw(3));
        assert!(err.to_string().contains("#3"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::InvalidCapacity(0));
    }
}
