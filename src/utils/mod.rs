//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Short code generation with collision avoidance
//! - [`url_normalizer`] - URL normalization and validation heuristics

pub mod code_generator;
pub mod url_normalizer;
