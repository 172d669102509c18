//! An open document together with the scripts it includes.

use crate::hir::{ScopeContext, ScriptDocument, Variable, global_variables};

/// A document the host has open, ready for cursor requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    text: String,
    script: ScriptDocument,
    includes: Vec<ScriptDocument>,
}

impl OpenDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let script = ScriptDocument::parse(&text);
        Self {
            text,
            script,
            includes: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn script(&self) -> &ScriptDocument {
        &self.script
    }

    /// Documents reached through `#include`, transitively.
    pub fn includes(&self) -> &[ScriptDocument] {
        &self.includes
    }

    pub fn set_includes(&mut self, includes: Vec<ScriptDocument>) {
        self.includes = includes;
    }

    /// This document followed by everything it includes.
    pub fn scripts(&self) -> impl Iterator<Item = &ScriptDocument> {
        std::iter::once(&self.script).chain(&self.includes)
    }

    /// File-scope variables of this document, then of its includes.
    pub fn globals(&self) -> Vec<Variable> {
        global_variables(self.scripts())
    }

    /// Scope at byte `offset`.
    pub fn scope_at(&self, offset: usize) -> ScopeContext {
        ScopeContext::new(self.script.sanitized_to(offset), self.globals())
    }
}
