//! The inverted index: postings, the shared store and its persisted form.

pub mod config;
pub mod format;
pub mod posting;
pub mod store;

pub use config::{IndexConfig, QueryNormalization};
pub use posting::{Posting, PostingList};
pub use store::{IndexStats, InvertedIndex};
