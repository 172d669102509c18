//! Logos-based lexer for script trivia
//!
//! Splits script text into comments, string literals and everything else.
//! Only the regions that must be blanked before pattern matching are told
//! apart; the rest of the language is left to the heuristics in `hir`.

use logos::Logos;

/// Whether a comment or string literal was closed before the end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    Closed,
    Open,
}

/// A token with its kind, text, and byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start;

        // Every byte is covered by some token; anything unexpected is code.
        let kind = logos_token.unwrap_or(TokenKind::Code);

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Token kinds produced by the trivia lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Closure),

    #[token("\"", |lex| string_literal(lex, '"'))]
    DoubleQuoted(Closure),

    #[token("'", |lex| string_literal(lex, '\''))]
    SingleQuoted(Closure),

    #[token("/")]
    Slash,

    #[regex(r#"[^/"']+"#)]
    Code,
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TokenKind::DoubleQuoted(_) | TokenKind::SingleQuoted(_))
    }

    /// Returns true if text appended after this token would still be inside it.
    pub fn is_unterminated(&self) -> bool {
        match self {
            TokenKind::LineComment => true,
            TokenKind::BlockComment(closure)
            | TokenKind::DoubleQuoted(closure)
            | TokenKind::SingleQuoted(closure) => *closure == Closure::Open,
            TokenKind::Slash | TokenKind::Code => false,
        }
    }
}

fn block_comment(lex: &mut logos::Lexer<'_, TokenKind>) -> Closure {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(idx) => {
            lex.bump(idx + 2);
            Closure::Closed
        }
        None => {
            lex.bump(rest.len());
            Closure::Open
        }
    }
}

fn string_literal(lex: &mut logos::Lexer<'_, TokenKind>, quote: char) -> Closure {
    let rest = lex.remainder();
    let mut escaped = false;
    for (idx, c) in rest.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            lex.bump(idx + c.len_utf8());
            return Closure::Closed;
        }
    }
    lex.bump(rest.len());
    Closure::Open
}
