//! Error types for project setup and manual loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A required game or manual path is unset or does not exist.
///
/// The host shows [`ConfigError::to_string`] to the user and offers to open
/// the setting named by [`ConfigError::setting_key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unable to start because no path to the KAG Manual was provided")]
    ManualPathNotSet,

    #[error(
        "Unable to start because an invalid/nonexistent path to the KAG Manual was provided: {}",
        .0.display()
    )]
    ManualPathMissing(PathBuf),

    #[error("Unable to start because no KAG path was provided")]
    GamePathNotSet,

    #[error(
        "Unable to start because an invalid/nonexistent KAG path was provided: {}",
        .0.display()
    )]
    BaseFolderMissing(PathBuf),
}

impl ConfigError {
    /// Setting the user must change to fix this error.
    pub fn setting_key(&self) -> &'static str {
        match self {
            Self::ManualPathNotSet | Self::ManualPathMissing(_) => "KAG.manual",
            Self::GamePathNotSet | Self::BaseFolderMissing(_) => "KAG.path",
        }
    }
}

/// Failure reading a required documentation directory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
