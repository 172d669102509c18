//! Foundation types for the kagscript toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`] - Line/column cursor positions and offset conversion
//! - [`text_utils`] - Identifier character classification
//! - Domain constants (primitive types, documentation file names)
//!
//! This module has NO dependencies on other kagscript modules.

pub mod constants;
mod position;
pub mod text_utils;

pub use position::Position;
