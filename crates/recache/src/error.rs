//! Error types for recache

use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Lookups on absent keys are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A capacity of zero was requested at construction
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "cache capacity must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}
