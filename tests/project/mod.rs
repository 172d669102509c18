//! Project layer tests
//!
//! Manual loading, knowledge publication and `#include` resolution against
//! real directories.

pub mod tests_manual_loader;
