//! Scope tracking.
//!
//! Approximates which declarations are visible at the cursor without a
//! parser: every closed `{...}` block before the cursor is collapsed to `{}`,
//! leaving only the blocks the cursor is still inside. Declarations left in
//! that text are visible, the last one shadowing earlier ones.
//!
//! This is a heuristic. A variable declared in an outer block and declared
//! again in a closed sibling block can be attributed to the wrong block.

use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;

use super::declaration::Variable;
use crate::base::constants::is_non_type_keyword;

/// Type spelling accepted in a declaration: `T`, `T@`, `T[]`, `T@[]@`,
/// `array<...>@`.
pub(crate) const TYPE_PATTERN: &str = r"(?:\w+(?:@*(?:\[\])+)?|array<[^;=(){}]*?>)@*";

/// Collapse every balanced `open ... close` group to an empty pair.
///
/// Returns the collapsed text and the byte offsets (into the collapsed text)
/// of every `open` that is never closed, outermost first.
pub(crate) fn collapse_balanced(text: &str, open: char, close: char) -> (String, Vec<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut unclosed = Vec::new();

    for c in text.chars() {
        if c == open {
            unclosed.push(out.len());
            out.push(c);
        } else if c == close {
            if let Some(start) = unclosed.pop() {
                out.truncate(start + open.len_utf8());
            }
            out.push(c);
        } else {
            out.push(c);
        }
    }

    (out, unclosed)
}

/// Regex matching a declaration: `[const] type [&in|&out|&inout] name` then `;`, `=`, `,` or `)`.
fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?m)(?:^|[(,;{{}}\s])(?:const\s+)?(?P<ty>{TYPE_PATTERN})\s*(?:&\s*(?:inout|in|out)\s*)?\b(?P<name>\w+)\s*[;=,)]"
        );
        Regex::new(&pattern).expect("Invalid declaration regex")
    })
}

/// Every `(type, name)` declaration in `text`, in text order.
///
/// Matching restarts right after each name, so a terminator can also be the
/// prefix of the next declaration (`int a;int b;`).
fn declarations(text: &str) -> Vec<(&str, &str)> {
    let re = declaration_regex();
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(caps) = re.captures_at(text, at) {
        let Some((ty, name)) = type_and_name(&caps) else {
            break;
        };
        at = name.end();
        if !is_non_type_keyword(leading_word(ty.as_str())) {
            found.push((ty.as_str(), name.as_str()));
        }
    }
    found
}

fn type_and_name<'t>(caps: &Captures<'t>) -> Option<(regex::Match<'t>, regex::Match<'t>)> {
    Some((caps.name("ty")?, caps.name("name")?))
}

fn leading_word(ty: &str) -> &str {
    let end = ty
        .find(|c: char| !c.is_alphanumeric() && c != '_')
        .unwrap_or(ty.len());
    &ty[..end]
}

/// What is in scope at one cursor position.
#[derive(Debug, Clone)]
pub struct ScopeContext {
    /// Sanitized text up to the cursor with every closed block collapsed.
    open_text: String,
    /// True if the cursor is inside at least one unclosed block.
    in_block: bool,
    /// File-scope variables of the document and its includes.
    globals: Vec<Variable>,
}

impl ScopeContext {
    /// Build a scope from the sanitized text up to the cursor and the
    /// file-scope variables visible from the document.
    pub fn new(sanitized_to_cursor: &str, globals: Vec<Variable>) -> Self {
        let (open_text, unclosed) = collapse_balanced(sanitized_to_cursor, '{', '}');
        Self {
            open_text,
            in_block: !unclosed.is_empty(),
            globals,
        }
    }

    /// Returns true if the cursor is inside a block.
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    pub fn globals(&self) -> &[Variable] {
        &self.globals
    }

    /// Declared type of `identifier` as seen from the cursor.
    ///
    /// Inside a block the last visible declaration wins; otherwise, or when
    /// there is none, the first file-scope variable of that name.
    pub fn resolve_local_type(&self, identifier: &str) -> Option<&str> {
        if self.in_block {
            let local = declarations(&self.open_text)
                .into_iter()
                .rev()
                .find(|(_, name)| *name == identifier);
            if let Some((ty, _)) = local {
                return Some(ty);
            }
        }

        self.globals
            .iter()
            .find(|v| v.name.as_ref() == identifier)
            .map(|v| v.ty.as_ref())
    }

    /// Names of every variable visible at the cursor, first declaration first.
    pub fn visible_variable_names(&self) -> Vec<Arc<str>> {
        let mut seen = FxHashSet::default();
        let names: Vec<Arc<str>> = if self.in_block {
            declarations(&self.open_text)
                .into_iter()
                .map(|(_, name)| Arc::from(name))
                .collect()
        } else {
            self.globals.iter().map(|v| v.name.clone()).collect()
        };

        names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}
