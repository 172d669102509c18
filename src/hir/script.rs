//! Declarations a script makes itself: free functions, file-scope variables
//! and includes.
//!
//! Script functions are layered over the knowledge base with
//! [`ScriptFunctions`]. The knowledge base is shared by every request and is
//! never modified; an overload added to an engine function copies that
//! function into the overlay first.

use std::sync::OnceLock;

use regex::Regex;

use super::callable::Callable;
use super::declaration::Variable;
use super::knowledge::{FunctionTable, function_key};
use super::scope::{TYPE_PATTERN, collapse_balanced};
use super::signature::Signature;
use crate::base::constants::is_non_type_keyword;
use crate::parser::{sanitize, strip_comments};

// ==================== Patterns ====================

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[^\S\n]*(\S+)[^\S\n]+(\w+)[^\S\n]*\(([^()]*)\)")
            .expect("Invalid script function regex")
    })
}

fn global_variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?m)^[^\S\n]*(?:const[^\S\n]+)?({TYPE_PATTERN})[^\S\n]*\b(\w+)[^\S\n]*[;=]"
        );
        Regex::new(&pattern).expect("Invalid global variable regex")
    })
}

fn include_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"#include\s+(?:"([^"\n]*)"|'([^'\n]*)')"#).expect("Invalid include regex")
    })
}

fn leading_word(ty: &str) -> &str {
    let end = ty
        .find(|c: char| !c.is_alphanumeric() && c != '_')
        .unwrap_or(ty.len());
    &ty[..end]
}

// ==================== ScriptDocument ====================

/// A script file prepared for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDocument {
    /// Comments and string contents blanked; same byte length as the source.
    sanitized: String,
    /// `sanitized` with every closed block collapsed.
    top_level: String,
    includes: Vec<String>,
}

impl ScriptDocument {
    pub fn parse(text: &str) -> Self {
        let sanitized = sanitize(text);
        let (top_level, _) = collapse_balanced(&sanitized, '{', '}');

        // Include paths are string literals, so they are read from a copy
        // that still has its strings.
        let (code, _) = collapse_balanced(&strip_comments(text), '{', '}');
        let includes = include_regex()
            .captures_iter(&code)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .filter(|path| !path.is_empty())
            .collect();

        Self {
            sanitized,
            top_level,
            includes,
        }
    }

    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Sanitized text before byte `offset`, clamped to the document.
    pub fn sanitized_to(&self, offset: usize) -> &str {
        let mut end = offset.min(self.sanitized.len());
        while !self.sanitized.is_char_boundary(end) {
            end -= 1;
        }
        &self.sanitized[..end]
    }

    /// Paths named by `#include` directives outside any block.
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// File-scope variable declarations, in source order.
    pub fn global_variables(&self) -> Vec<Variable> {
        global_variable_regex()
            .captures_iter(&self.top_level)
            .filter(|caps| !is_non_type_keyword(leading_word(&caps[1])))
            .map(|caps| Variable::new(None, &caps[1], &caps[2]))
            .collect()
    }

    /// Free functions declared at file scope as `(type, name, signature)`.
    pub fn functions(&self) -> Vec<(&str, &str, Signature)> {
        function_regex()
            .captures_iter(&self.top_level)
            .filter_map(|caps| {
                let ty = caps.get(1)?.as_str();
                if is_non_type_keyword(leading_word(ty)) {
                    return None;
                }
                let name = caps.get(2)?.as_str();
                let params = caps.get(3)?.as_str();
                Some((ty, name, Signature::parse(params)))
            })
            .collect()
    }
}

// ==================== ScriptFunctions ====================

/// Script functions layered over the knowledge base's function table.
#[derive(Debug, Clone)]
pub struct ScriptFunctions<'kb> {
    base: &'kb FunctionTable,
    local: FunctionTable,
}

impl<'kb> ScriptFunctions<'kb> {
    pub fn new(base: &'kb FunctionTable) -> Self {
        Self {
            base,
            local: FunctionTable::new(),
        }
    }

    /// Overlay holding the functions of every given document.
    pub fn from_documents<'d>(
        base: &'kb FunctionTable,
        documents: impl IntoIterator<Item = &'d ScriptDocument>,
    ) -> Self {
        let mut overlay = Self::new(base);
        for document in documents {
            overlay.add_document(document);
        }
        overlay
    }

    pub fn add_document(&mut self, document: &ScriptDocument) {
        for (ty, name, signature) in document.functions() {
            self.add_signature(ty, name, signature);
        }
    }

    /// Add a global script function overload.
    pub fn add_signature(&mut self, ty: &str, name: &str, signature: Signature) {
        let key = function_key(None, name);
        if !self.local.contains_key(&key) {
            if let Some(engine) = self.base.get_by_key(&key) {
                tracing::trace!("[SCRIPT] Overloading engine function {key}");
                self.local.insert(key.as_str(), engine.clone());
            }
        }
        self.local.add_signature(None, ty, name, signature);
    }

    pub fn get(&self, namespace: Option<&str>, name: &str) -> Option<&Callable> {
        let key = function_key(namespace, name);
        self.local
            .get_by_key(&key)
            .or_else(|| self.base.get_by_key(&key))
    }

    /// Functions declared or extended by scripts.
    pub fn local(&self) -> &FunctionTable {
        &self.local
    }

    /// Every function, script entries replacing engine entries of the same key.
    pub fn iter(&self) -> impl Iterator<Item = &Callable> {
        let local = self.local.iter().map(|(_, f)| f);
        let base = self
            .base
            .iter()
            .filter(|(key, _)| !self.local.contains_key(key))
            .map(|(_, f)| f);
        local.chain(base)
    }
}

/// Merge the file-scope variables of `documents`, first declaration first.
pub fn global_variables<'d>(documents: impl IntoIterator<Item = &'d ScriptDocument>) -> Vec<Variable> {
    documents
        .into_iter()
        .flat_map(ScriptDocument::global_variables)
        .collect()
}
