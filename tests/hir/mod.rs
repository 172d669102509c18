//! HIR layer tests
//!
//! Tests for the resolution engine:
//! - Chain resolution against a fabricated knowledge base
//! - Scope tracking and shadowing
//! - Type normalization

pub mod tests_chain_resolution;
