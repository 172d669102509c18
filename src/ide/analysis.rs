//! AnalysisHost and Analysis: unified state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state and provides `Analysis` snapshots
//! for querying. This pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::with_knowledge(handle);
//!
//! // Apply file changes
//! host.set_file_content("Scripts/Blob.as", content);
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let items = analysis.completions(Path::new("Scripts/Blob.as"), position);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::Position;
use crate::hir::KnowledgeBase;
use crate::project::{IncludeResolver, KnowledgeHandle};

use super::{CompletionItem, OpenDocument, SignatureHelp, completions, signature_help};

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    /// Open documents by path
    files: FxHashMap<PathBuf, OpenDocument>,
    /// The published knowledge base, possibly not loaded yet
    knowledge: KnowledgeHandle,
    /// Index of `Base/` scripts for `#include` resolution
    include_resolver: Option<IncludeResolver>,
    /// Whether included documents need resolving again
    includes_dirty: bool,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost with no knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host reading the knowledge base from `knowledge`.
    pub fn with_knowledge(knowledge: KnowledgeHandle) -> Self {
        Self {
            knowledge,
            ..Self::default()
        }
    }

    /// The handle the knowledge base is published through.
    pub fn knowledge(&self) -> &KnowledgeHandle {
        &self.knowledge
    }

    /// Set the index used to resolve `#include` directives.
    pub fn set_include_resolver(&mut self, resolver: IncludeResolver) {
        self.include_resolver = Some(resolver);
        self.includes_dirty = true;
    }

    /// Set the content of a file.
    pub fn set_file_content(&mut self, path: impl Into<PathBuf>, content: &str) {
        self.files.insert(path.into(), OpenDocument::new(content));
        self.includes_dirty = true;
    }

    /// Remove a file from storage.
    pub fn remove_file(&mut self, path: &Path) {
        self.files.remove(path);
    }

    /// Check if a file exists in storage.
    pub fn has_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Get the number of files open.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Resolve the includes of every open document again (call after
    /// scripts under `Base/` changed).
    pub fn mark_dirty(&mut self) {
        self.includes_dirty = true;
    }

    /// Resolve `#include` directives of every open document.
    ///
    /// This is called automatically by `analysis()` if includes are dirty.
    pub fn rebuild_includes(&mut self) {
        for document in self.files.values_mut() {
            let includes = match &self.include_resolver {
                Some(resolver) => resolver.resolve(document.script()),
                None => Vec::new(),
            };
            document.set_includes(includes);
        }
        self.includes_dirty = false;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If includes are dirty, they are resolved first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        if self.includes_dirty {
            self.rebuild_includes();
        }

        Analysis {
            knowledge: self.knowledge.snapshot(),
            files: &self.files,
        }
    }
}

/// Immutable snapshot answering IDE requests.
///
/// Without a loaded knowledge base every request answers with no data.
#[derive(Debug)]
pub struct Analysis<'a> {
    knowledge: Option<Arc<KnowledgeBase>>,
    files: &'a FxHashMap<PathBuf, OpenDocument>,
}

impl<'a> Analysis<'a> {
    /// The knowledge base this snapshot answers from.
    pub fn knowledge(&self) -> Option<&KnowledgeBase> {
        self.knowledge.as_deref()
    }

    pub fn document(&self, path: &Path) -> Option<&'a OpenDocument> {
        self.files.get(path)
    }

    /// Completion items at `position`.
    pub fn completions(&self, path: &Path, position: Position) -> Vec<CompletionItem> {
        match (self.knowledge(), self.document(path)) {
            (Some(knowledge), Some(document)) => completions(knowledge, document, position),
            _ => Vec::new(),
        }
    }

    /// Signature help at `position`.
    pub fn signature_help(&self, path: &Path, position: Position) -> Option<SignatureHelp> {
        signature_help(self.knowledge()?, self.document(path)?, position)
    }
}
