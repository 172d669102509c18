//! Project setup: configuration, the manual loader and include resolution.

mod config;
mod error;
mod include_resolver;
mod knowledge_handle;
pub mod manual;

pub use config::ProjectConfig;
pub use error::{ConfigError, LoadError};
pub use include_resolver::IncludeResolver;
pub use knowledge_handle::KnowledgeHandle;
pub use manual::ManualLoader;
