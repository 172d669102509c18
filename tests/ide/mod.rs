//! IDE layer tests
//!
//! Completion and signature help through `AnalysisHost`, the way an editor
//! host drives them.

pub mod tests_completion;
