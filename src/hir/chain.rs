//! Chain extraction: the dotted member-access expression ending at the cursor.
//!
//! `blob.getSprite().` yields `[blob, getSprite()]`. Closed argument lists are
//! collapsed first so nested calls never split the chain.

use std::fmt;

use super::scope::collapse_balanced;
use crate::base::text_utils::is_word_character;

/// One link of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Variable or property access.
    Ident(String),
    /// Call of a function, method or constructor.
    Call(String),
}

impl Segment {
    pub fn name(&self) -> &str {
        match self {
            Segment::Ident(name) | Segment::Call(name) => name,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Segment::Call(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_call() {
            write!(f, "{}()", self.name())
        } else {
            write!(f, "{}", self.name())
        }
    }
}

/// A chain ending in a call whose argument list is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainWithArgs {
    /// Receiver chain; the last segment is the open call.
    pub chain: Vec<Segment>,
    /// Raw argument texts typed so far, split on commas.
    pub args: Vec<String>,
}

impl ChainWithArgs {
    /// Zero-based index of the argument being typed.
    pub fn active_parameter(&self) -> usize {
        self.args.len().saturating_sub(1)
    }
}

/// Start of the trailing name of `text`: a word run, optionally joined to
/// earlier word runs by `::`. A lone `:` ends the name.
fn qualified_name_start(text: &str) -> usize {
    let mut start = text.len();
    loop {
        let word = text[..start].trim_end_matches(is_word_character).len();
        match text[..word].strip_suffix("::") {
            Some(before) => start = before.len(),
            None => return word,
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    name.chars().any(is_word_character)
}

/// Split the trailing run of `name`, `name()` and `.` tokens, in text order.
///
/// Always returns at least one piece; pieces may have empty names.
fn trailing_pieces(text: &str) -> Vec<(&str, bool)> {
    let mut pieces = Vec::new();
    let mut rest = text;

    loop {
        rest = rest.trim_end();
        let is_call = match rest.strip_suffix("()") {
            Some(before) => {
                rest = before.trim_end();
                true
            }
            None => false,
        };

        let start = qualified_name_start(rest);
        pieces.push((&rest[start..], is_call));
        rest = &rest[..start];

        match rest.trim_end().strip_suffix('.') {
            Some(before) => rest = before,
            None => break,
        }
    }

    pieces.reverse();
    pieces
}

fn to_segments(pieces: &[(&str, bool)]) -> Option<Vec<Segment>> {
    pieces
        .iter()
        .map(|&(name, is_call)| {
            if !is_valid_name(name) {
                return None;
            }
            let name = name.to_string();
            Some(if is_call {
                Segment::Call(name)
            } else {
                Segment::Ident(name)
            })
        })
        .collect()
}

/// Chain of completed segments before the partial word at the cursor.
///
/// `text_to_cursor` must be sanitized. Returns an empty chain when the cursor
/// does not follow a member access.
pub fn extract_chain(text_to_cursor: &str) -> Vec<Segment> {
    let (collapsed, _) = collapse_balanced(text_to_cursor, '(', ')');
    let mut pieces = trailing_pieces(&collapsed);
    // The last piece is the word being typed.
    pieces.pop();

    to_segments(&pieces).unwrap_or_default()
}

/// Chain and arguments of the innermost call whose argument list is open at
/// the cursor.
///
/// `text_to_cursor` must be sanitized. Returns `None` outside any argument
/// list or when the open parenthesis does not follow a callable name.
pub fn extract_chain_with_args(text_to_cursor: &str) -> Option<ChainWithArgs> {
    let (collapsed, unclosed) = collapse_balanced(text_to_cursor, '(', ')');
    let open = *unclosed.last()?;

    let receiver = &collapsed[..open];
    let args_text = &collapsed[open + 1..];

    let mut pieces = trailing_pieces(receiver);
    if let Some(last) = pieces.last_mut() {
        last.1 = true;
    }
    let chain = to_segments(&pieces)?;

    let args = args_text
        .split(',')
        .map(|arg| arg.trim().to_string())
        .collect();

    Some(ChainWithArgs { chain, args })
}
