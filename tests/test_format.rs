//! Comprehensive tests for the console formatting layer.
//!
//! Tests cover:
//! - Folding behavior (row counts, order preservation)
//! - Truncation with ellipsis
//! - Scalar vs collection dispatch through the Describe trait
//! - Explicit FormatOptions replacing any global display state

use pointstats::{
    describe_type, fold, format, format_coll, format_scalar, format_string, indent, truncate,
    Describe, FormatOptions, Point,
};

#[test]
fn test_fold_scenario_nine_elements_width_five() {
    let v: Vec<i32> = (1..=9).collect();
    let text = fold(&v, 2, 5);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].trim(), "1, 2, 3, 4, 5,");
    assert_eq!(lines[1].trim(), "6, 7, 8, 9");
}

#[test]
fn test_fold_preserves_order_and_values() {
    let v = vec![9, 7, 5, 3, 1];
    let text = fold(&v, 0, 2);
    let flattened: String = text.replace('\n', " ");
    let positions: Vec<usize> = [9, 7, 5, 3, 1]
        .iter()
        .map(|n| flattened.find(&n.to_string()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_fold_exact_multiple_of_width() {
    let v = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(fold(&v, 0, 3).lines().count(), 2);
}

#[test]
fn test_fold_indents_each_row() {
    let v = vec![1, 2, 3, 4];
    let text = fold(&v, 4, 2);
    for line in text.lines() {
        assert!(line.starts_with("    "));
    }
}

#[test]
fn test_indent_width() {
    assert_eq!(indent(6).len(), 6);
    assert!(indent(6).chars().all(|c| c == ' '));
}

#[test]
fn test_truncate_behavior() {
    assert_eq!(truncate(10, "short"), "short");
    assert_eq!(truncate(4, "a longer string"), "a lo...");
}

#[test]
fn test_format_coll_layout() {
    let opts = FormatOptions::default().with_fold_width(5);
    let v: Vec<i32> = (1..=9).collect();
    let text = format_coll(&v, "v", "", &opts);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "  v: {");
    assert_eq!(lines[3], "  }");
}

#[test]
fn test_format_scalar_layout() {
    let opts = FormatOptions::default();
    assert_eq!(format_scalar(&2.5, "x", "", &opts), "  x: 2.5");
    assert_eq!(format_scalar(&true, "flag", "!", &opts), "  flag: true!");
}

#[test]
fn test_format_string_quotes() {
    let opts = FormatOptions::default();
    assert_eq!(format_string("hello", "s", "", &opts), "  s: \"hello\"");
}

#[test]
fn test_dispatch_by_describe_impl() {
    let opts = FormatOptions::default();

    // Scalars take the single-line path
    assert!(!format(&42, "n", "", &opts).contains('{'));
    assert!(!format("text", "s", "", &opts).contains('{'));

    // Iterable types take the folded collection path
    assert!(format(&vec![1, 2], "v", "", &opts).contains('{'));
    assert!(format(&[1, 2, 3], "a", "", &opts).contains('{'));
    assert!(format(&[1u8, 2][..], "sl", "", &opts).contains('{'));

    // User-defined types choose their own strategy
    let p = Point::<i32, 2>::from_coords(&[1, 2]);
    assert!(format(&p, "p", "", &opts).contains("Point<i32, 2>"));
}

#[test]
fn test_options_are_explicit_per_call() {
    let narrow = FormatOptions::default().with_fold_width(2);
    let wide = FormatOptions::default().with_fold_width(10);
    let v = vec![1, 2, 3, 4];

    // Same value, different layouts, no shared state between calls
    assert_eq!(fold(&v, 0, narrow.fold_width).lines().count(), 2);
    assert_eq!(fold(&v, 0, wide.fold_width).lines().count(), 1);
}

#[test]
fn test_describe_type_reports_size() {
    let opts = FormatOptions::default();
    let text = describe_type(&0u64, "n", &opts);
    assert!(text.contains("u64"));
    assert!(text.contains("8 bytes"));
}

#[test]
fn test_describe_impl_for_custom_type() {
    struct Tagged(i32);

    impl Describe for Tagged {
        fn describe(&self, name: &str, opts: &FormatOptions) -> String {
            format_scalar(&self.0, name, " (tagged)", opts)
        }
    }

    let opts = FormatOptions::default();
    assert_eq!(format(&Tagged(5), "t", "", &opts), "  t: 5 (tagged)");
}
