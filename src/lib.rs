//! # Vortex
//!
//! A small in-memory inverted index with a compact binary on-disk format.
//!
//! ## Features
//!
//! - Whitespace tokenization with ASCII punctuation stripping and lowercasing
//! - Concurrent document insertion behind a single lock
//! - Snapshot lookups returning `(file_id, frequency)` postings
//! - Length-prefixed little-endian persistence with bounded, validated reads
//!
//! ## Example
//!
//! ```
//! use vortex::index::{InvertedIndex, Posting};
//!
//! let index = InvertedIndex::new();
//! index.add_document(1, "hello, world!");
//!
//! assert_eq!(index.search("hello"), vec![Posting::new(1, 1)]);
//! assert!(index.search("hello,").is_empty());
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod storage;
