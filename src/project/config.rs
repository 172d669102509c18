//! Project configuration: where the game and its manual live.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::base::constants::{BASE_DIR, MANUAL_INTERFACE_DIR};

/// User-owned paths the core needs. Set by the host from its settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Game install root, containing `Base/`.
    pub game_path: Option<PathBuf>,
    /// Manual root, containing `interface/`.
    pub manual_path: Option<PathBuf>,
}

impl ProjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.game_path = Some(path.into());
        self
    }

    pub fn with_manual_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manual_path = Some(path.into());
        self
    }

    /// `<manual>/interface/`, which must exist.
    pub fn manual_interface_dir(&self) -> Result<PathBuf, ConfigError> {
        let root = non_empty(self.manual_path.as_deref()).ok_or(ConfigError::ManualPathNotSet)?;
        let dir = root.join(MANUAL_INTERFACE_DIR);
        if !dir.is_dir() {
            return Err(ConfigError::ManualPathMissing(dir));
        }
        Ok(dir)
    }

    /// `<game>/Base/`, which must exist.
    pub fn base_dir(&self) -> Result<PathBuf, ConfigError> {
        let root = non_empty(self.game_path.as_deref()).ok_or(ConfigError::GamePathNotSet)?;
        let dir = root.join(BASE_DIR);
        if !dir.is_dir() {
            return Err(ConfigError::BaseFolderMissing(dir));
        }
        Ok(dir)
    }

    /// Check both paths, reporting the manual first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.manual_interface_dir()?;
        self.base_dir()?;
        Ok(())
    }
}

/// Hosts report an unset string setting as an empty path.
fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
