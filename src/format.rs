//! Console formatting for scalar and collection values.
//!
//! This module renders values as indented, width-limited text for human
//! reading. Collections are folded into rows of a fixed number of elements,
//! scalars are rendered on a single line, and long type names are truncated
//! with an ellipsis.
//!
//! Layout is controlled by an explicit [`FormatOptions`] value passed into
//! every call. There is no process-wide formatting state.
//!
//! Dispatch between the collection and scalar rendering paths is an explicit
//! capability: types implement the [`Describe`] trait, choosing the strategy
//! that fits them, and [`format`] delegates to it.
//!
//! # Examples
//!
//! ```
//! use pointstats::format::{format, fold, FormatOptions};
//!
//! let opts = FormatOptions::default();
//!
//! // Collection path: folded rows
//! let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let text = format(&v, "v", "\n", &opts);
//! assert!(text.contains('{'));
//!
//! // Scalar path: single line
//! let text = format(&3.5, "x", "\n", &opts);
//! assert!(text.contains("x: 3.5"));
//! ```

use itertools::Itertools;
use std::fmt::Debug;

/// Layout parameters for the console formatter.
///
/// Replaces the mutable process-wide display record of earlier designs with
/// a value the caller passes explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces to indent rendered lines
    pub indent: usize,
    /// Number of elements rendered per row before folding
    pub fold_width: usize,
    /// Maximum characters of a type name or long string before an ellipsis
    pub truncate: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            fold_width: 7,
            truncate: 40,
        }
    }
}

impl FormatOptions {
    /// Create options with the default layout (indent 2, fold width 7,
    /// truncation at 40 characters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the number of elements per folded row.
    pub fn with_fold_width(mut self, fold_width: usize) -> Self {
        self.fold_width = fold_width;
        self
    }

    /// Set the truncation length.
    pub fn with_truncate(mut self, truncate: usize) -> Self {
        self.truncate = truncate;
        self
    }
}

/// Rendering capability for [`format`].
///
/// Implementors choose the collection path ([`format_coll`]) or the scalar
/// path ([`format_scalar`]). The choice is made by the impl, not by
/// structural inspection of the type.
pub trait Describe {
    /// Render self under `name` using the layout in `opts`.
    fn describe(&self, name: &str, opts: &FormatOptions) -> String;
}

/// Render any [`Describe`] value, appending `suffix`.
///
/// This is the single entry point corresponding to the scalar/collection
/// dispatch: the strategy is supplied by the value's `Describe` impl.
pub fn format<V>(value: &V, name: &str, suffix: &str, opts: &FormatOptions) -> String
where
    V: Describe + ?Sized,
{
    let mut out = value.describe(name, opts);
    out.push_str(suffix);
    out
}

/// Build an indent string of `n` spaces.
pub fn indent(n: usize) -> String {
    " ".repeat(n)
}

/// Truncate `s` to at most `max` characters, appending `"..."` when cut.
///
/// # Examples
///
/// ```
/// use pointstats::format::truncate;
///
/// assert_eq!(truncate(5, "short"), "short");
/// assert_eq!(truncate(5, "much too long"), "much ...");
/// ```
pub fn truncate(max: usize, s: &str) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

/// Fold elements into rows of `width`, each row indented by `left` spaces.
///
/// Element order and values are preserved. A 9-element sequence folded at
/// width 5 produces two rows of 5 and 4 elements.
///
/// # Examples
///
/// ```
/// use pointstats::format::fold;
///
/// let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let text = fold(&v, 2, 5);
/// assert_eq!(text.lines().count(), 2);
/// ```
pub fn fold<I>(items: I, left: usize, width: usize) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    let width = width.max(1);
    let pad = indent(left);
    let chunks = items
        .into_iter()
        .map(|item| format!("{item:?}"))
        .chunks(width);
    (&chunks)
        .into_iter()
        .map(|mut row| format!("{}{}", pad, row.join(", ")))
        .join(",\n")
}

/// Render a collection as `"name: { e0, e1, ... }"` with folded rows.
///
/// Works for any iterable whose elements implement [`Debug`].
pub fn format_coll<I>(items: I, name: &str, suffix: &str, opts: &FormatOptions) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    let pad = indent(opts.indent);
    let body = fold(items, opts.indent + 2, opts.fold_width);
    format!("{pad}{name}: {{\n{body}\n{pad}}}{suffix}")
}

/// Render a scalar as a single `"name: value"` line.
pub fn format_scalar<T: Debug>(value: &T, name: &str, suffix: &str, opts: &FormatOptions) -> String {
    format!("{}{}: {:?}{}", indent(opts.indent), name, value, suffix)
}

/// Render a string as a single quoted `"name: \"value\""` line.
pub fn format_string(value: &str, name: &str, suffix: &str, opts: &FormatOptions) -> String {
    format!("{}{}: \"{}\"{}", indent(opts.indent), name, value, suffix)
}

/// Render a value's call-site name, its (truncated) static type name, and
/// its size in bytes.
pub fn describe_type<T>(_value: &T, name: &str, opts: &FormatOptions) -> String {
    let pad = indent(opts.indent);
    let typename = truncate(opts.truncate, std::any::type_name::<T>());
    format!(
        "{pad}{name} type: {typename}\n{pad}size: {} bytes",
        std::mem::size_of::<T>()
    )
}

/// Display `text` wrapped in emphasis lines of `width` dashes.
pub fn show_note(text: &str, width: usize) {
    let line = "-".repeat(width);
    println!("{line}");
    println!("  {text}");
    println!("{line}");
}

/// Display a short emphasized operation line.
pub fn show_op(text: &str) {
    println!("--- {text} ---");
}

/// Print a newline.
pub fn nl() {
    println!();
}

macro_rules! impl_describe_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Describe for $t {
                fn describe(&self, name: &str, opts: &FormatOptions) -> String {
                    format_scalar(self, name, "", opts)
                }
            }
        )*
    };
}

impl_describe_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl Describe for String {
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        format_string(self, name, "", opts)
    }
}

impl Describe for str {
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        format_string(self, name, "", opts)
    }
}

impl<T: Debug> Describe for Vec<T> {
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        format_coll(self, name, "", opts)
    }
}

impl<T: Debug> Describe for [T] {
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        format_coll(self, name, "", opts)
    }
}

impl<T: Debug, const N: usize> Describe for [T; N] {
    fn describe(&self, name: &str, opts: &FormatOptions) -> String {
        format_coll(self, name, "", opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(4), "    ");
    }

    #[test]
    fn test_truncate_short_unchanged() {
        assert_eq!(truncate(10, "abc"), "abc");
        assert_eq!(truncate(3, "abc"), "abc");
    }

    #[test]
    fn test_truncate_long_gets_ellipsis() {
        assert_eq!(truncate(3, "abcdef"), "abc...");
    }

    #[test]
    fn test_fold_two_rows() {
        let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let text = fold(&v, 2, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1, 2, 3, 4, 5,");
        assert_eq!(lines[1], "  6, 7, 8, 9");
    }

    #[test]
    fn test_fold_single_row() {
        let v = vec![1, 2, 3];
        assert_eq!(fold(&v, 0, 7), "1, 2, 3");
    }

    #[test]
    fn test_fold_empty() {
        let v: Vec<i32> = Vec::new();
        assert_eq!(fold(&v, 2, 5), "");
    }

    #[test]
    fn test_fold_zero_width_treated_as_one() {
        let v = vec![1, 2];
        assert_eq!(fold(&v, 0, 0).lines().count(), 2);
    }

    #[test]
    fn test_format_scalar() {
        let opts = FormatOptions::default();
        assert_eq!(format_scalar(&42, "n", "", &opts), "  n: 42");
    }

    #[test]
    fn test_format_string_quoted() {
        let opts = FormatOptions::default();
        assert_eq!(format_string("hi", "s", "", &opts), "  s: \"hi\"");
    }

    #[test]
    fn test_format_coll_shape() {
        let opts = FormatOptions::default().with_fold_width(3);
        let v = vec![1, 2, 3, 4];
        let text = format_coll(&v, "v", "", &opts);
        assert!(text.starts_with("  v: {\n"));
        assert!(text.ends_with("\n  }"));
        assert!(text.contains("1, 2, 3,"));
        assert!(text.contains("4"));
    }

    #[test]
    fn test_dispatch_scalar_vs_collection() {
        let opts = FormatOptions::default();
        let scalar = format(&1.5, "x", "", &opts);
        assert!(!scalar.contains('{'));

        let coll = format(&vec![1, 2, 3], "v", "", &opts);
        assert!(coll.contains('{'));
    }

    #[test]
    fn test_format_appends_suffix() {
        let opts = FormatOptions::default();
        let text = format(&7, "n", "\n", &opts);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_describe_type_truncates() {
        let opts = FormatOptions::default().with_truncate(5);
        let v: Vec<i32> = Vec::new();
        let text = describe_type(&v, "v", &opts);
        assert!(text.contains("..."));
        assert!(text.contains("size:"));
    }

    #[test]
    fn test_options_builder() {
        let opts = FormatOptions::new()
            .with_indent(4)
            .with_fold_width(3)
            .with_truncate(10);
        assert_eq!(opts.indent, 4);
        assert_eq!(opts.fold_width, 3);
        assert_eq!(opts.truncate, 10);
    }
}
