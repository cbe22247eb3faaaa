//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VortexArgs};
use crate::error::Result;
use crate::index::{IndexStats, Posting};

/// One search hit, resolved to a file path when the caller knows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub file_id: i32,
    pub frequency: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Hit {
    /// Build a hit from a posting and an optional path.
    pub fn from_posting(posting: &Posting, path: Option<String>) -> Self {
        Hit {
            file_id: posting.doc_id,
            frequency: posting.frequency,
            path,
        }
    }
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub term: String,
    pub hits: Vec<Hit>,
    pub duration_ms: u64,
}

/// Result structure for indexing a directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexingResult {
    pub files_indexed: usize,
    pub duration_ms: u64,
    pub index_path: String,
    pub stats: IndexStats,
    pub verification: SearchResults,
}

/// Result structure for index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub index_path: String,
    pub stats: IndexStats,
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, " - File: {} (Freq: {})", path, self.frequency),
            None => write!(f, " - Doc ID: {}, Freq: {}", self.file_id, self.frequency),
        }
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search results for '{}': {} hit(s)", self.term, self.hits.len())?;
        for hit in &self.hits {
            writeln!(f, "{hit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Indexed {} files in {}ms.",
            self.files_indexed, self.duration_ms
        )?;
        writeln!(f, "Saved index to {}", self.index_path)?;
        writeln!(
            f,
            "Terms: {}, postings: {}",
            self.stats.total_terms, self.stats.total_postings
        )?;
        write!(f, "{}", self.verification)
    }
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index: {}", self.index_path)?;
        writeln!(f, "Terms:           {}", self.stats.total_terms)?;
        writeln!(f, "Postings:        {}", self.stats.total_postings)?;
        writeln!(f, "Total frequency: {}", self.stats.total_frequency)
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + fmt::Display>(
    message: &str,
    result: &T,
    args: &VortexArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &VortexArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &VortexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
