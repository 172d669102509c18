//! Resolves `#include` directives against the game's `Base/` scripts.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use walkdir::WalkDir;

use super::config::ProjectConfig;
use super::error::ConfigError;
use crate::base::constants::SCRIPT_EXTENSION;
use crate::hir::ScriptDocument;

/// Index of every script under `Base/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeResolver {
    files: Vec<PathBuf>,
}

impl IncludeResolver {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Index every `.as` file below `base_dir`, in file name order.
    pub fn index(base_dir: &Path) -> Self {
        let files: Vec<PathBuf> = WalkDir::new(base_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION))
            .collect();

        tracing::debug!(
            "[INCLUDE] Indexed {} scripts under {}",
            files.len(),
            base_dir.display()
        );
        Self { files }
    }

    /// Index the `Base/` folder configured in `config`.
    pub fn from_config(config: &ProjectConfig) -> Result<Self, ConfigError> {
        Ok(Self::index(&config.base_dir()?))
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// First indexed script whose path ends with `include`.
    pub fn find(&self, include: &str) -> Option<&Path> {
        let include = Path::new(include);
        self.files
            .iter()
            .find(|path| path.ends_with(include))
            .map(PathBuf::as_path)
    }

    /// Every document `document` includes, directly or transitively.
    ///
    /// Each file is read at most once. Includes that match no indexed
    /// script, or that cannot be read, are logged and skipped.
    pub fn resolve(&self, document: &ScriptDocument) -> Vec<ScriptDocument> {
        let mut pending: VecDeque<String> = document.includes().iter().cloned().collect();
        let mut visited = FxHashSet::default();
        let mut documents = Vec::new();

        while let Some(include) = pending.pop_front() {
            let Some(path) = self.find(&include) else {
                tracing::warn!("Included file not found: {include}");
                continue;
            };
            if !visited.insert(path.to_path_buf()) {
                continue;
            }

            match fs::read_to_string(path) {
                Ok(text) => {
                    tracing::debug!("[INCLUDE] {include} -> {}", path.display());
                    let included = ScriptDocument::parse(&text);
                    pending.extend(included.includes().iter().cloned());
                    documents.push(included);
                }
                Err(e) => tracing::warn!("[INCLUDE] Cannot read {}: {e}", path.display()),
            }
        }

        documents
    }
}
