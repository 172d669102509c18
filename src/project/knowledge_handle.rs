//! Shared access to the loaded knowledge base.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::RwLock;

use super::error::LoadError;
use super::manual::ManualLoader;
use crate::hir::KnowledgeBase;

/// Publishes the current knowledge base to every request.
///
/// Readers take an `Arc` snapshot that stays valid while a reload swaps in a
/// new knowledge base. Before the first load there is no knowledge base and
/// every request answers with no data.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeHandle {
    current: Arc<RwLock<Option<Arc<KnowledgeBase>>>>,
}

impl KnowledgeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that already holds `knowledge`.
    pub fn with_knowledge(knowledge: KnowledgeBase) -> Self {
        let handle = Self::new();
        handle.replace(knowledge);
        handle
    }

    /// Snapshot of the current knowledge base, if one is loaded.
    pub fn snapshot(&self) -> Option<Arc<KnowledgeBase>> {
        self.current.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Replace the knowledge base wholesale.
    pub fn replace(&self, knowledge: KnowledgeBase) {
        *self.current.write() = Some(Arc::new(knowledge));
    }

    /// Forget the knowledge base, e.g. after the manual path was unset.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// Load the manual and publish the result.
    pub fn load(&self, loader: &ManualLoader) -> Result<(), LoadError> {
        let knowledge = loader.load()?;
        self.replace(knowledge);
        Ok(())
    }

    /// Load the manual on a background thread.
    ///
    /// The previous knowledge base, if any, stays visible until the new one
    /// is complete.
    pub fn load_in_background(&self, loader: ManualLoader) -> JoinHandle<Result<(), LoadError>> {
        let handle = self.clone();
        thread::spawn(move || {
            handle.load(&loader).inspect_err(|e| {
                tracing::warn!("[MANUAL] Loading failed: {e}");
            })
        })
    }
}
