//! Pointstats - Generic statistics, coordinate, and timing utilities with
//! folded console formatting.
//!
//! The library collects a small set of generic value types and a console
//! formatting layer for rendering them:
//!
//! - **Stats**: on-demand size/min/max/sum/average over a borrowed slice of
//!   numeric values
//! - **Point**: a const-generic N-arity coordinate tuple carrying an
//!   embedded timestamp, with slice indexing and iteration
//! - **Time / Timer**: calendar-clock snapshots with explicit local/UTC
//!   decomposition, and a monotonic stopwatch with validated ordering
//! - **Formatting layer**: fold/indent/truncate helpers and a [`Describe`]
//!   capability trait that selects collection or scalar rendering
//!
//! # Examples
//!
//! ## Statistics over a borrowed sequence
//!
//! ```
//! use pointstats::Stats;
//!
//! let v = vec![1.0, 2.5, -3.0, 4.5];
//! let s = Stats::new(&v);
//!
//! assert_eq!(s.min().unwrap(), -3.0);
//! assert_eq!(s.max().unwrap(), 4.5);
//! assert_eq!(s.sum().unwrap(), 5.0);
//! assert_eq!(s.avg().unwrap(), 1.25);
//! ```
//!
//! ## Points with padding and truncation
//!
//! ```
//! use pointstats::Point;
//!
//! let p = Point::<i32, 3>::from_coords(&[1, 2]);
//! assert_eq!(p.coords(), &[1, 2, 0]);
//! ```
//!
//! ## Folded console rendering
//!
//! ```
//! use pointstats::{format, FormatOptions};
//!
//! let opts = FormatOptions::default().with_fold_width(5);
//! let v: Vec<i32> = (1..=9).collect();
//! let text = format(&v, "v", "\n", &opts);
//! assert_eq!(text.lines().count(), 4); // name line, two folded rows, brace
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return the crate [`Result`] with a
//! [`PointstatsError`] kind the caller can pattern-match: empty
//! collections, out-of-range indexing, undecomposed calendar reads, and
//! misordered timer queries. Nothing is retried or recovered internally.

// Module declarations
pub mod error;
pub mod format;
pub mod point;
pub mod stats;
pub mod time;

// Re-exports for convenient access
pub use error::{PointstatsError, Result};
pub use format::{
    describe_type, fold, format, format_coll, format_scalar, format_string, indent, nl,
    show_note, show_op, truncate, Describe, FormatOptions,
};
pub use point::Point;
pub use stats::{Numeric, Stats};
pub use time::{Calendar, Time, Timer, Zone};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Pointstats";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
