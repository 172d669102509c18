//! Cursor markers in test sources.

use kagscript::Position;

/// Marks the cursor in a test source.
pub const CURSOR: &str = "<CURSOR>";

/// Remove the cursor marker, returning the source and the cursor position.
///
/// Panics if the marker is missing.
pub fn split_cursor(source: &str) -> (String, Position) {
    let offset = source
        .find(CURSOR)
        .unwrap_or_else(|| panic!("source has no {CURSOR} marker: {source:?}"));

    let before = &source[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count();

    let text = format!("{before}{}", &source[offset + CURSOR.len()..]);
    (text, Position::new(line, column))
}

/// Sanitized text before the cursor marker.
pub fn sanitized_to_cursor(source: &str) -> String {
    let offset = source
        .find(CURSOR)
        .unwrap_or_else(|| panic!("source has no {CURSOR} marker: {source:?}"));
    kagscript::parser::sanitize(&source[..offset])
}

#[test]
fn test_split_cursor() {
    let (text, position) = split_cursor("a\nbé<CURSOR>c");
    assert_eq!(text, "a\nbéc");
    assert_eq!(position, Position::new(1, 2));
}
