//! Standard analyzer used for indexing.
//!
//! Splits on ASCII whitespace, removes ASCII punctuation, folds ASCII letters
//! to lowercase and drops tokens left empty. Non-ASCII characters are never
//! modified.

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::AsciiLowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::strip::StripPunctuationFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// The analyzer every [`InvertedIndex`](crate::index::InvertedIndex) indexes with.
#[derive(Clone, Debug, Default)]
pub struct StandardAnalyzer {
    tokenizer: WhitespaceTokenizer,
    strip: StripPunctuationFilter,
    lowercase: AsciiLowercaseFilter,
    remove_empty: RemoveEmptyFilter,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let tokens = self.tokenizer.tokenize(text);
        let tokens = self.strip.filter(tokens);
        let tokens = self.lowercase.filter(tokens);
        self.remove_empty.filter(tokens)
    }

    fn normalize_term(&self, term: &str) -> String {
        AsciiLowercaseFilter::normalize(&StripPunctuationFilter::normalize(term))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
