//! The shared, thread-safe inverted index.
//!
//! One [`parking_lot::Mutex`] guards the whole term map. Every public
//! operation takes it exclusively, including `search`, so a document's merge
//! is atomic with respect to every other call. `save` and `load` hold the
//! lock for the full duration of their file I/O.

use std::path::Path;

use log::{debug, error, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::token_filter::lowercase::AsciiLowercaseFilter;
use crate::error::Result;
use crate::index::config::{IndexConfig, QueryNormalization};
use crate::index::format::{TermMap, read_index, write_index};
use crate::index::posting::Posting;
use crate::storage::file::{FileInput, FileOutput};
use crate::storage::{StorageInput, StorageOutput};

/// Summary counts for an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct terms.
    pub total_terms: u64,
    /// Number of postings across all terms.
    pub total_postings: u64,
    /// Sum of all posting frequencies.
    pub total_frequency: u64,
}

/// An in-memory inverted index mapping normalized terms to postings.
///
/// # Examples
///
/// ```
/// use vortex::index::{InvertedIndex, Posting};
///
/// let index = InvertedIndex::new();
/// index.add_document(1, "Cat cat CAT");
///
/// assert_eq!(index.search("cat"), vec![Posting::new(1, 3)]);
/// assert!(index.search("dog").is_empty());
/// ```
pub struct InvertedIndex {
    terms: Mutex<TermMap>,
    analyzer: StandardAnalyzer,
    config: IndexConfig,
}

impl InvertedIndex {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        InvertedIndex {
            terms: Mutex::new(TermMap::new()),
            analyzer: StandardAnalyzer::new(),
            config,
        }
    }

    /// Get the configuration of this index.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Index `content` under the caller-assigned `file_id`.
    ///
    /// Term counting happens before the lock is taken; the merge of every
    /// term of the document then runs under a single lock acquisition.
    /// Any `file_id` is accepted, including negative or repeated ones.
    pub fn add_document(&self, file_id: i32, content: &str) {
        let counts = self.analyzer.term_counts(content);
        if counts.is_empty() {
            debug!("document {file_id} has no terms");
            return;
        }

        let mut terms = self.terms.lock();
        for (term, count) in counts {
            terms
                .entry(term)
                .or_default()
                .push(Posting::new(file_id, count));
        }
    }

    /// Return a copy of the postings for `term`, or an empty vector.
    ///
    /// With [`QueryNormalization::LowercaseOnly`] the query is only
    /// lowercased, so a term containing punctuation never matches.
    pub fn search(&self, term: &str) -> Vec<Posting> {
        let key = self.normalize_query(term);

        let terms = self.terms.lock();
        terms
            .get(&key)
            .map(|postings| postings.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// Write the index to `path`, reporting failures through the log.
    ///
    /// On failure the index is unchanged.
    pub fn save<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(e) = self.try_save(path) {
            error!("Error saving index to {}: {e}", path.display());
        }
    }

    /// Replace the index with the contents of `path`, reporting failures
    /// through the log.
    ///
    /// The index is cleared first, so it is left empty if the file cannot be
    /// opened or is corrupted.
    pub fn load<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(e) = self.try_load(path) {
            error!("Error loading index from {}: {e}", path.display());
        }
    }

    /// Write the index to `path`, creating or truncating the file.
    pub fn try_save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let terms = self.terms.lock();

        let output = FileOutput::create(path, &self.config.storage)?;
        let output = write_index(&terms, output)?;

        info!(
            "Saved {} terms to {} ({} bytes)",
            terms.len(),
            path.display(),
            output.position()
        );
        Ok(())
    }

    /// Replace the index with the contents of `path`.
    pub fn try_load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut terms = self.terms.lock();
        terms.clear();

        let input = FileInput::open(path, &self.config.storage)?;
        *terms = read_index(input)?;

        info!("Loaded {} terms from {}", terms.len(), path.display());
        Ok(())
    }

    /// Write the index to an arbitrary output.
    pub fn write_to<W: StorageOutput>(&self, output: W) -> Result<W> {
        let terms = self.terms.lock();
        write_index(&terms, output)
    }

    /// Replace the index with the contents of an arbitrary input.
    ///
    /// Like [`try_load`](Self::try_load), the index is empty on failure.
    pub fn read_from<R: StorageInput>(&self, input: R) -> Result<()> {
        let mut terms = self.terms.lock();
        terms.clear();
        *terms = read_index(input)?;
        Ok(())
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.lock().len()
    }

    /// Number of postings across all terms.
    pub fn posting_count(&self) -> usize {
        self.terms.lock().values().map(|postings| postings.len()).sum()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.lock().is_empty()
    }

    /// Summary counts, taken under a single lock acquisition.
    pub fn stats(&self) -> IndexStats {
        let terms = self.terms.lock();
        let mut stats = IndexStats {
            total_terms: terms.len() as u64,
            ..IndexStats::default()
        };
        for postings in terms.values() {
            stats.total_postings += postings.len() as u64;
            stats.total_frequency += postings.total_frequency();
        }
        stats
    }

    fn normalize_query(&self, term: &str) -> String {
        match self.config.query_normalization {
            QueryNormalization::LowercaseOnly => AsciiLowercaseFilter::normalize(term),
            QueryNormalization::Full => self.analyzer.normalize_term(term),
        }
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertedIndex")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .finish()
    }
}
