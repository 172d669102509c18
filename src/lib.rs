//! # kagscript-base
//!
//! Core library for KAG AngelScript code intelligence: member completion and
//! signature help resolved against the engine manual.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (completion, signature help)
//!   ↓
//! project   → Configuration, manual loading, include resolution
//!   ↓
//! hir       → Declaration model, scope tracking, chain resolution
//!   ↓
//! parser    → Logos trivia lexer, lexical sanitizer
//!   ↓
//! base      → Primitives (Position, identifier classification, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → project → ide)
// ============================================================================

/// Foundation types: Position, text utilities, domain constants
pub mod base;

/// Parser: Logos trivia lexer and lexical sanitizer
pub mod parser;

/// High-level IR: declaration model, knowledge base, chain resolution
pub mod hir;

/// Project management: configuration, manual loader, include resolver
pub mod project;

/// IDE features: completion, signature help
pub mod ide;

// Re-export foundation types
pub use base::Position;
