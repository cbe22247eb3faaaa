//! Core analyzer trait definition.
//!
//! An analyzer turns raw document text into the normalized terms stored in
//! the index:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Term Counts → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use vortex::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let counts = analyzer.term_counts("Cat cat CAT, dog!");
//!
//! assert_eq!(counts.get("cat"), Some(&3));
//! assert_eq!(counts.get("dog"), Some(&1));
//! ```

use ahash::AHashMap;

use crate::analysis::token::TokenStream;

/// Occurrence count of every normalized term within one piece of text.
pub type TermCounts = AHashMap<String, i32>;

/// Trait for analyzers that convert text into normalized tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can serve every
/// indexing thread.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of normalized tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Normalize a single term without splitting it.
    ///
    /// Applying this to an already normalized term must return it unchanged.
    fn normalize_term(&self, term: &str) -> String;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Count the occurrences of every normalized term in `text`.
    ///
    /// Empty or whitespace-only text yields an empty map.
    fn term_counts(&self, text: &str) -> TermCounts {
        let mut counts = TermCounts::new();
        for token in self.analyze(text) {
            let count = counts.entry(token.text).or_insert(0);
            *count = count.saturating_add(1);
        }
        counts
    }
}
