//! Analyzers combining a tokenizer with a chain of filters.

pub mod analyzer;
pub mod standard;

pub use analyzer::{Analyzer, TermCounts};
pub use standard::StandardAnalyzer;
