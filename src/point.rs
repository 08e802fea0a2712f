//! Point - a fixed-arity coordinate tuple with an embedded timestamp.
//!
//! [`Point<T, N>`] represents a point in an N-dimensional space. The arity
//! is a const generic, the coordinate type is generic over any cloneable,
//! defaultable element. Every construction path leaves the point holding
//! exactly `N` coordinates: shorter inputs are padded with `T::default()`,
//! longer inputs are truncated to the first `N` elements.
//!
//! The point also carries a [`Time`] instance, conceptually the time at
//! which something was at that point in space. It is captured at
//! construction and may be refreshed with [`Point::update_time`].
//!
//! # Examples
//!
//! ```
//! use pointstats::Point;
//!
//! let p = Point::<i32, 3>::from_coords(&[1, 2]);
//! assert_eq!(p.coords(), &[1, 2, 0]);
//!
//! let p = Point::<i32, 3>::from_coords(&[1, 2, 3, 4]);
//! assert_eq!(p.coords(), &[1, 2, 3]);
//!
//! // Deref to slice gives indexing and iteration
//! assert_eq!(p[0], 1);
//! assert_eq!(p.iter().sum::<i32>(), 6);
//! ```

use crate::error::{PointstatsError, Result};
use crate::format::{fold, indent, truncate, Describe, FormatOptions};
use crate::time::Time;
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};
use std::slice;

/// A point with `N` coordinates of type `T` and an embedded timestamp.
///
/// Value type: freely cloneable, comparable on coordinates. The
/// coordinate sequence always has exactly `N` elements.
#[derive(Debug, Clone)]
pub struct Point<T, const N: usize>
where
    T: Clone + Default + Debug,
{
    coords: Vec<T>,
    tm: Time,
}

impl<T, const N: usize> Point<T, N>
where
    T: Clone + Default + Debug,
{
    /// Create a point with `N` default coordinates and the current time.
    pub fn new() -> Self {
        Self {
            coords: vec![T::default(); N],
            tm: Time::local(),
        }
    }

    /// Create a point from `init`, padding with `T::default()` when `init`
    /// is shorter than `N` and keeping only the first `N` elements when it
    /// is longer.
    pub fn from_coords(init: &[T]) -> Self {
        let mut p = Self::new();
        p.init(init);
        p
    }

    /// Refill the coordinates from `v` using the same pad/truncate rule as
    /// [`Point::from_coords`]. The timestamp is unchanged.
    pub fn init(&mut self, v: &[T]) {
        for (i, slot) in self.coords.iter_mut().enumerate() {
            *slot = v.get(i).cloned().unwrap_or_default();
        }
    }

    /// Number of coordinates. Always `N`.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True only for `Point<T, 0>`.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Checked coordinate access.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.coords.get(index).ok_or(PointstatsError::IndexOutOfRange {
            index,
            size: N,
        })
    }

    /// Checked mutable coordinate access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.coords
            .get_mut(index)
            .ok_or(PointstatsError::IndexOutOfRange { index, size: N })
    }

    /// The coordinate sequence.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Mutable view of the coordinate sequence. The length cannot change
    /// through this view; use [`Point::set_coords`] for bulk replacement.
    pub fn coords_mut(&mut self) -> &mut [T] {
        &mut self.coords
    }

    /// Replace all coordinates from `v`, applying the pad/truncate rule so
    /// the point still holds exactly `N` elements.
    pub fn set_coords(&mut self, mut v: Vec<T>) {
        v.truncate(N);
        v.resize_with(N, T::default);
        self.coords = v;
    }

    /// The embedded timestamp.
    pub fn time(&self) -> &Time {
        &self.tm
    }

    /// Mutable access to the embedded timestamp.
    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.tm
    }

    /// Refresh the timestamp to the current time.
    pub fn update_time(&mut self) {
        self.tm = Time::local();
    }

    /// Render the timestamp as a calendar string.
    pub fn time_to_string(&self) -> Result<String> {
        self.tm.to_string_calendar()
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Iterate mutably over the coordinates.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.coords.iter_mut()
    }
}

impl<T, const N: usize> Default for Point<T, N>
where
    T: Clone + Default + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<&[T]> for Point<T, N>
where
    T: Clone + Default + Debug,
{
    fn from(init: &[T]) -> Self {
        Self::from_coords(init)
    }
}

impl<T, const N: usize> From<Vec<T>> for Point<T, N>
where
    T: Clone + Default + Debug,
{
    fn from(v: Vec<T>) -> Self {
        let mut p = Self::new();
        p.set_coords(v);
        p
    }
}

impl<T, const N: usize> PartialEq for Point<T, N>
where
    T: Clone + Default + Debug + PartialEq,
{
    /// Points compare on coordinates only; timestamps are auxiliary.
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<T, const N: usize> Deref for Point<T, N>
where
    T: Clone + Default + Debug,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.coords
    }
}

impl<T, const N: usize> DerefMut for Point<T, N>
where
    T: Clone + Default + Debug,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.coords
    }
}

impl<T, const N: usize> AsRef<[T]> for Point<T, N>
where
    T: Clone + Default + Debug,
{
    fn as_ref(&self) -> &[T] {
        &self.coords
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Point<T, N>
where
    T: Clone + Default + Debug,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Point<T, N>
where
    T: Clone + Default + Debug,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for Point<T, N>
where
    T: Clone + Default + Debug,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<T, const N: usize> Describe for Point<T, N>
where
    T: Clone + Default + Debug,
{
    /// Collection rendering: type header, folded coordinates, timestamp.
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        let pad = indent(opts.indent);
        let header = truncate(
            opts.truncate,
            &format!("Point<{}, {}>", std::any::type_name::<T>(), N),
        );
        let body = fold(&self.coords, opts.indent + 2, opts.fold_width);
        let ts = self
            .tm
            .to_string_calendar()
            .unwrap_or_else(|_| format!("epoch {} secs", self.tm.epoch_secs()));
        format!("{pad}{name}: {header} {{\n{body}\n{pad}}}\n{pad}{ts}")
    }
}
