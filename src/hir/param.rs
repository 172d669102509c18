//! Parameters of a callable signature.
//!
//! Grammar of one parameter, as written in the manual and in scripts:
//!
//! ```text
//! [const] type [&in | &out | &inout | &] [name] [= default]
//! ```

use std::fmt;
use std::sync::Arc;

use crate::base::text_utils::is_identifier;
use crate::parser::fix_pointer_handles;

/// Reference qualifier on a parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefQualifier {
    #[default]
    None,
    In,
    Out,
    /// `&inout`, also written as a bare `&`.
    InOut,
}

impl RefQualifier {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "" | "inout" => Some(RefQualifier::InOut),
            "in" => Some(RefQualifier::In),
            "out" => Some(RefQualifier::Out),
            _ => None,
        }
    }

    /// Source spelling, including the `&`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefQualifier::None => "",
            RefQualifier::In => "&in",
            RefQualifier::Out => "&out",
            RefQualifier::InOut => "&inout",
        }
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub is_const: bool,
    /// Declared type spelling, decoration included.
    pub ty: Arc<str>,
    pub ref_qualifier: RefQualifier,
    /// Parameter name; empty when the declaration omits it.
    pub name: Arc<str>,
    pub default_value: Option<Arc<str>>,
}

impl Param {
    /// Parse a single parameter declaration.
    ///
    /// Returns `None` when no type can be found.
    pub fn parse(text: &str) -> Option<Self> {
        let (decl, default_value) = match text.find('=') {
            Some(idx) => {
                let default = text[idx + 1..].trim();
                (&text[..idx], (!default.is_empty()).then(|| Arc::from(default)))
            }
            None => (text, None),
        };

        let decl = fix_pointer_handles(decl.trim());
        let (is_const, decl) = match decl.strip_prefix("const") {
            Some(rest) if rest.starts_with(char::is_whitespace) => (true, rest.trim_start()),
            _ => (false, decl.as_str()),
        };

        let (ty, ref_qualifier, name) = match decl.find('&') {
            Some(idx) => {
                let after = decl[idx + 1..].trim_start();
                let (word, rest) = split_word(after);
                let (ref_qualifier, name) = match RefQualifier::parse(word) {
                    Some(qualifier) => (qualifier, rest.trim()),
                    // `T& name`: the word after `&` is the name
                    None => (RefQualifier::InOut, after.trim()),
                };
                (decl[..idx].trim(), ref_qualifier, name)
            }
            None => match decl.rfind(char::is_whitespace) {
                Some(idx) if is_identifier(decl[idx..].trim()) => {
                    (decl[..idx].trim(), RefQualifier::None, decl[idx..].trim())
                }
                _ => (decl.trim(), RefQualifier::None, ""),
            },
        };

        if ty.is_empty() || (!name.is_empty() && !is_identifier(name)) {
            return None;
        }

        Some(Self {
            is_const,
            ty: Arc::from(ty),
            ref_qualifier,
            name: Arc::from(name),
            default_value,
        })
    }

    /// Returns true if the declaration named this parameter.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Give an unnamed parameter a placeholder name (`a`, `b`, ... by position).
    ///
    /// Hosts key parameter labels by text, so identical unnamed labels collide.
    pub fn with_placeholder_name(mut self, index: usize) -> Self {
        if !self.has_name() {
            self.name = Arc::from(placeholder_name(index));
        }
        self
    }
}

/// Placeholder for the parameter at `index`: `a`..`z`, then `a26`, `a27`, ...
fn placeholder_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'a' + i).to_string(),
        _ => format!("a{index}"),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_alphanumeric() && c != '_')
        .unwrap_or(text.len());
    text.split_at(end)
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            write!(f, "const ")?;
        }
        write!(f, "{}", self.ty)?;
        if self.ref_qualifier != RefQualifier::None {
            write!(f, " {}", self.ref_qualifier.as_str())?;
        }
        if self.has_name() {
            write!(f, " {}", self.name)?;
        }
        if let Some(default) = &self.default_value {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}
