//! Stats - On-demand statistics over a borrowed numeric sequence.
//!
//! [`Stats`] wraps a reference to an externally owned slice and computes
//! size, minimum, maximum, sum, and average on demand. Nothing is cached;
//! each call re-scans the slice. The referenced sequence must outlive the
//! `Stats` instance, which the borrow checker enforces through the
//! lifetime parameter.
//!
//! Every operation requires at least one element and returns
//! [`PointstatsError::EmptyCollection`] otherwise.
//!
//! # Examples
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

use crate::error::{PointstatsError, Result};
use crate::format::{format_coll, FormatOptions};
use std::fmt::Debug;
use std::ops::Add;

/// Numeric capability required by [`Stats`].
///
/// Elements must support comparison, addition, a default (zero) value, and
/// lossless widening to `f64` for averaging. Implemented for the primitive
/// numeric types that widen to `f64` without loss; `i64`, `u64`, and
/// `usize` are excluded because they don't.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> + Default + Into<f64> + Debug {}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(i8, i16, i32, u8, u16, u32, f32, f64);

/// Computes simple statistics over a borrowed slice of numeric values.
///
/// Holds a non-owning reference; construction never fails, but every
/// operation errors on an empty slice.
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a, T: Numeric> {
    items: &'a [T],
}

impl<'a, T: Numeric> Stats<'a, T> {
    /// Create a `Stats` over `items`. The slice may be empty; operations
    /// on an empty slice return [`PointstatsError::EmptyCollection`].
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    fn check(&self) -> Result<()> {
        if self.items.is_empty() {
            Err(PointstatsError::EmptyCollection)
        } else {
            Ok(())
        }
    }

    /// Number of data items.
    pub fn size(&self) -> Result<usize> {
        self.check()?;
        Ok(self.items.len())
    }

    /// Largest value (not necessarily largest magnitude).
    pub fn max(&self) -> Result<T> {
        self.check()?;
        let mut biggest = self.items[0];
        for &item in self.items {
            if item > biggest {
                biggest = item;
            }
        }
        Ok(biggest)
    }

    /// Smallest value (not necessarily smallest magnitude).
    pub fn min(&self) -> Result<T> {
        self.check()?;
        let mut smallest = self.items[0];
        for &item in self.items {
            if item < smallest {
                smallest = item;
            }
        }
        Ok(smallest)
    }

    /// Sum of data values, folded from `T::default()`.
    pub fn sum(&self) -> Result<T> {
        self.check()?;
        let mut total = T::default();
        for &item in self.items {
            total = total + item;
        }
        Ok(total)
    }

    /// Average of data values as `f64`.
    pub fn avg(&self) -> Result<f64> {
        let total: f64 = self.sum()?.into();
        Ok(total / self.items.len() as f64)
    }

    /// Render the underlying values under `name` as a folded collection.
    ///
    /// Like every other operation, errors on an empty slice.
    pub fn describe(&self, name: &str, opts: &FormatOptions) -> Result<String> {
        self.check()?;
        Ok(format_coll(self.items, name, "", opts))
    }
}
