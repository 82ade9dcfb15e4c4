//! Error types for swapcache.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in swapcache.
///
/// By having a single error type, error handling is consistent across the
/// cache engines and the store collaborators. Store failures are propagated
/// verbatim — the cache layer never retries.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key absent from both the cache and the backing store.
    ///
    /// Only surfaced on `get`.
    #[error("key {0:?} not found")]
    NotFound(String),

    /// A key the file store cannot map to a file (empty, or escapes the
    /// store directory).
    #[error("invalid key {0:?}")]
    InvalidKey(String),

    /// Unrecognized eviction policy name.
    #[error("unknown eviction policy {0:?}")]
    UnknownPolicy(String),
}

impl Error {
    /// Check whether this is the not-found case.
    ///
    /// Callers often want to treat a missing key differently from a real
    /// store failure.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
