//! Text analysis: turning raw document text into normalized index terms.
//!
//! Normalization is deliberately byte-oriented: only ASCII whitespace
//! separates tokens, only ASCII punctuation is stripped and only ASCII
//! letters are lowercased.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
