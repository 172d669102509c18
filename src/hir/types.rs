//! Type normalization.
//!
//! Declarations keep the type exactly as spelled (`CBlob@`, `u16[]`,
//! `array<CBlob@>@`). Lookups into the knowledge base go through
//! [`true_type`], which strips that decoration down to the object name.

/// Canonical name of every array spelling.
pub const ARRAY_TYPE: &str = "array";

/// Canonicalize a declared type spelling to its lookup key.
///
/// Rules, first match wins:
/// 1. `array<...>` (optionally handle-suffixed) → `array`
/// 2. `T[]`, `T@[][]`, ... (optionally handle-suffixed) → `array`
/// 3. `T@`, `T@@`, `T @` → `T`
/// 4. anything else is returned unchanged
///
/// ```
/// use kagscript::hir::true_type;
///
/// assert_eq!(true_type("array<int>@"), "array");
/// assert_eq!(true_type("CBlob@@"), "CBlob");
/// assert_eq!(true_type("int[][]"), "array");
/// assert_eq!(true_type("f32"), "f32");
/// ```
pub fn true_type(declared: &str) -> &str {
    let ty = declared.trim();
    let unhandled = ty.trim_end_matches(|c: char| c == '@' || c.is_whitespace());

    if unhandled.starts_with("array<") && unhandled.ends_with('>') {
        return ARRAY_TYPE;
    }

    if let Some(element) = strip_array_brackets(unhandled) {
        if !element.trim_end_matches('@').is_empty() {
            return ARRAY_TYPE;
        }
    }

    unhandled
}

/// Strip one or more trailing `[]` pairs, returning the element spelling.
fn strip_array_brackets(ty: &str) -> Option<&str> {
    let mut rest = ty.strip_suffix("[]")?;
    while let Some(inner) = rest.strip_suffix("[]") {
        rest = inner;
    }
    Some(rest)
}
