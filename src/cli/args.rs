//! Command line argument parsing for the Vortex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Vortex - build and query a binary inverted index of text files
#[derive(Parser, Debug, Clone)]
#[command(name = "vortex")]
#[command(about = "Build and query a binary inverted index of text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VortexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "VORTEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VortexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index every .txt file under a directory, save, reload and run a query
    Index(IndexArgs),

    /// Search a saved index for a term
    Search(SearchArgs),

    /// Show statistics of a saved index
    Stats(StatsArgs),
}

/// Arguments for indexing a directory
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Directory to scan recursively for .txt files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Where to write the index
    #[arg(short, long, value_name = "INDEX_FILE", default_value = "vortex.index")]
    pub output: PathBuf,

    /// Number of indexing threads (default: number of CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Term to look up in the reloaded index
    #[arg(long, default_value = "search")]
    pub query: String,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the index file
    #[arg(value_name = "INDEX_FILE")]
    pub index_path: PathBuf,

    /// Term to search for
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Order hits by frequency, highest first, instead of insertion order
    #[arg(long)]
    pub sort: bool,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the index file
    #[arg(value_name = "INDEX_FILE")]
    pub index_path: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_defaults() {
        let args = VortexArgs::try_parse_from(["vortex", "index", "docs"]).unwrap();

        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Index(index) => {
                assert_eq!(index.directory, PathBuf::from("docs"));
                assert_eq!(index.output, PathBuf::from("vortex.index"));
                assert_eq!(index.query, "search");
                assert!(index.threads.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_with_flags() {
        let args = VortexArgs::try_parse_from([
            "vortex", "-vv", "-f", "json", "search", "out.index", "hello",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.index_path, PathBuf::from("out.index"));
                assert_eq!(search.term, "hello");
                assert!(!search.sort);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_sort_flag() {
        let args =
            VortexArgs::try_parse_from(["vortex", "search", "out.index", "hello", "--sort"])
                .unwrap();
        match args.command {
            Command::Search(search) => assert!(search.sort),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = VortexArgs::try_parse_from(["vortex", "-q", "-vvv", "stats", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
