//! Lexical sanitizer.
//!
//! Blanks comments and string literal contents while keeping every byte
//! offset and line break in place, so the pattern-based analyses in `hir`
//! never match inside them and cursor offsets stay valid.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::lexer::{Lexer, TokenKind, tokenize};

/// Blank comments and string contents, then normalize pointer handles.
///
/// The result has the same byte length and line structure as `text`.
pub fn sanitize(text: &str) -> String {
    fix_pointer_handles(&blank_trivia(text, true))
}

/// Blank comments only, keeping string literals intact.
///
/// Used where string contents matter, e.g. `#include "path"` directives.
pub fn strip_comments(text: &str) -> String {
    fix_pointer_handles(&blank_trivia(text, false))
}

/// Returns true if the end of `text` lies inside a string literal or comment.
pub fn is_inside_string_or_comment(text: &str) -> bool {
    Lexer::new(text)
        .last()
        .is_some_and(|token| token.kind.is_unterminated())
}

fn blank_trivia(text: &str, strings: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token.kind {
            kind if kind.is_comment() => push_blanked(&mut out, token.text),
            TokenKind::DoubleQuoted(_) | TokenKind::SingleQuoted(_) if strings => {
                push_blanked_string(&mut out, token.text)
            }
            _ => out.push_str(token.text),
        }
    }
    out
}

/// Replace every non-whitespace char with as many spaces as its UTF-8 width.
fn push_blanked(out: &mut String, text: &str) {
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
        } else {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        }
    }
}

/// Blank the interior of a string literal, keeping its delimiters.
fn push_blanked_string(out: &mut String, text: &str) {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return;
    };
    out.push(quote);

    let body = chars.as_str();
    let (interior, closing) = match body.strip_suffix(quote) {
        // A trailing quote preceded by an odd run of backslashes is escaped.
        Some(interior) if interior.chars().rev().take_while(|c| *c == '\\').count() % 2 == 0 => {
            (interior, Some(quote))
        }
        _ => (body, None),
    };

    push_blanked(out, interior);
    if let Some(quote) = closing {
        out.push(quote);
    }
}

fn pointer_handle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([\w\]>])([^\S\n]+)@([^\S\n]*)").expect("Invalid pointer handle regex")
    })
}

/// Move a detached handle marker onto its type: `CBlob @ b` becomes `CBlob@  b`.
///
/// Only horizontal whitespace is touched, so lengths and lines are preserved.
pub fn fix_pointer_handles(text: &str) -> String {
    pointer_handle_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let padding = caps[2].len() + caps[3].len();
            format!("{}@{}", &caps[1], " ".repeat(padding))
        })
        .into_owned()
}
