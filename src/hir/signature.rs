//! Signatures: one overload of a callable.

use std::fmt;

use super::param::Param;

/// An ordered parameter list representing one overload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Parse a comma-separated parameter list (without the parentheses).
    ///
    /// Unnamed parameters receive placeholder names. Entries that are not a
    /// parameter declaration are skipped.
    pub fn parse(list: &str) -> Self {
        let params = split_params(list)
            .into_iter()
            .filter(|text| !text.is_empty())
            .filter_map(Param::parse)
            .enumerate()
            .map(|(i, param)| param.with_placeholder_name(i))
            .collect();
        Self { params }
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Rendered label of every parameter, in order.
    pub fn param_labels(&self) -> Vec<String> {
        self.params.iter().map(Param::to_string).collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

/// Split `text` on commas that are not nested in `()`, `[]`, `{}` or `<>`.
///
/// Every piece is trimmed. An empty input yields a single empty piece, so the
/// number of pieces is always the number of commas plus one.
pub fn split_params(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(text[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    pieces.push(text[start..].trim());
    pieces
}
