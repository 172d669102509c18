//! Parser layer: trivia lexer and the lexical sanitizer.
//!
//! Scripts are never fully parsed. The lexer only separates comments and
//! string literals from code so later pattern matching can ignore them.

pub mod lexer;
mod sanitize;

pub use lexer::{Closure, Lexer, Token, TokenKind, tokenize};
pub use sanitize::{fix_pointer_handles, is_inside_string_or_comment, sanitize, strip_comments};
