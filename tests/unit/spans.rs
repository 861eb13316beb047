use super::*;

#[test]
fn opaque_column_is_one_run() {
    let t = SpanTable::build(&[5, 5, 5, 5], 1, 4);
    assert_eq!(t.column(0), &[Span { top: 0, length: 4 }]);
}

#[test]
fn transparent_column_has_no_runs() {
    let t = SpanTable::build(&[0, 0, 0], 1, 3);
    assert!(t.column(0).is_empty());
}

#[test]
fn runs_split_on_transparent_pixels() {
    // Column 0: 1 0 1 1 0 2 ; column 1: 0 0 3 0 0 0
    let pixels = [1, 0, 1, 1, 0, 2, 0, 0, 3, 0, 0, 0];
    let t = SpanTable::build(&pixels, 2, 6);
    assert_eq!(t.width(), 2);
    assert_eq!(
        t.column(0),
        &[
            Span { top: 0, length: 1 },
            Span { top: 2, length: 2 },
            Span { top: 5, length: 1 },
        ]
    );
    assert_eq!(t.column(1), &[Span { top: 2, length: 1 }]);
    assert_eq!(t.column(1)[0].end(), 3);
}

#[test]
fn out_of_range_column_is_empty() {
    let t = SpanTable::build(&[1, 1], 2, 1);
    assert!(t.column(2).is_empty());
}
