//! High-level IR (HIR): the declaration model and chain resolution.
//!
//! ## Key Types
//!
//! - [`KnowledgeBase`]: Every object, function, variable, enum and hook
//!   the engine documents
//! - [`Object`], [`Callable`], [`Signature`], [`Param`]: The declaration model
//! - [`ScriptDocument`]: A sanitized script with its file-scope declarations
//! - [`ScriptFunctions`]: Script functions layered over the knowledge base
//! - [`ScopeContext`]: Declarations visible at the cursor
//! - [`ChainResolver`]: Resolves a [`Segment`] chain to an object or callable
//!
//! ## Resolution Flow
//!
//! ```text
//! document text
//!     │
//!     ▼
//! ScriptDocument::parse       ← sanitize, collapse blocks, find includes
//!     │
//!     ├──► ScriptFunctions    ← script functions over KnowledgeBase functions
//!     ├──► ScopeContext       ← open blocks before the cursor + globals
//!     ▼
//! extract_chain(text)         ← `a.b().` → [a, b()]
//!     │
//!     ▼
//! ChainResolver::resolve_*    ← walk segments, normalize types with true_type
//! ```

mod callable;
mod chain;
mod declaration;
mod knowledge;
mod object;
mod param;
mod resolve;
mod scope;
mod script;
mod signature;
mod types;

pub use callable::{Callable, CallableKind};
pub use chain::{ChainWithArgs, Segment, extract_chain, extract_chain_with_args};
pub use declaration::{EnumMember, Property, Variable};
pub use knowledge::{FunctionTable, KnowledgeBase, function_key};
pub use object::Object;
pub use param::{Param, RefQualifier};
pub use resolve::ChainResolver;
pub use scope::ScopeContext;
pub use script::{ScriptDocument, ScriptFunctions, global_variables};
pub use signature::{Signature, split_params};
pub use types::{ARRAY_TYPE, true_type};
