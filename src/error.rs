//! Error types for the cache's caller-input validation.
//!
//! Absence (a miss on `get`/`contains`) is not an error — it is surfaced as
//! `None`/`false` from the relevant operation. Only the two validation
//! failures a caller can trigger on `set` are modeled here.

use thiserror::Error;

/// Errors returned by the cache's write-path operations.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CacheError {
    /// The key or value was empty.
    #[error("key or value is invalid (empty key or empty value)")]
    InvalidKey,

    /// The record (key + value + framing) would not fit within half of the
    /// cache's configured capacity.
    #[error("record too large for this cache's configured capacity")]
    TooBigKey,
}

/// Convenience alias for results returned by the cache's write path.
pub type Result<T> = std::result::Result<T, CacheError>;
