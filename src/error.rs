//! Error types for the Pointstats library.
//!
//! This module provides a unified error type for all fallible operations in
//! the library, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Pointstats operations.
///
/// Each variant is a discriminated kind that callers can pattern-match,
/// rather than inspecting message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointstatsError {
    /// A statistics operation was requested on an empty collection
    #[error("collection is empty")]
    EmptyCollection,

    /// Index out of bounds
    #[error("index out of range: index {index}, size {size}")]
    IndexOutOfRange {
        /// The index that was accessed
        index: usize,
        /// The valid size
        size: usize,
    },

    /// A calendar field was read before any decomposition call
    #[error("calendar fields not decomposed - call get_local_time() or get_gmt_time() first")]
    NotDecomposed,

    /// An elapsed duration was queried before start() was called
    #[error("timer not started - call start() before querying elapsed time")]
    TimerNotStarted,

    /// An elapsed duration was queried before stop() was called
    #[error("timer not stopped - call stop() before querying elapsed time")]
    TimerNotStopped,
}

/// A specialized `Result` type for Pointstats operations.
///
/// This is a type alias for `Result<T, PointstatsError>` and is used
/// throughout the Pointstats codebase for consistency.
pub type Result<T> = std::result::Result<T, PointstatsError>;
