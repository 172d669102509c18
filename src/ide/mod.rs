//! IDE features: high-level APIs for editor requests.
//!
//! This module provides the interface between the resolution engine (HIR)
//! and an editor host. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **No data, no error**: Unresolvable requests answer with empty results
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use kagscript::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::with_knowledge(handle);
//! host.set_file_content("Scripts/Blob.as", "void onInit(CBlob@ this)\n{\n\tthis.");
//!
//! let analysis = host.analysis();
//! let items = analysis.completions(Path::new("Scripts/Blob.as"), Position::new(2, 6));
//! ```

mod analysis;
mod completion;
mod document;
mod signature_help;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{COMPLETION_TRIGGERS, CompletionItem, CompletionKind, completions};
pub use document::OpenDocument;
pub use signature_help::{
    SIGNATURE_HELP_TRIGGERS, SignatureHelp, SignatureInformation, signature_help,
};
