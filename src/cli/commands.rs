//! Command implementations for the Vortex CLI.
//!
//! The directory walk, file-id assignment and path bookkeeping live here;
//! the index itself only ever sees `(file_id, content)` pairs.

use std::fs;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, VortexError};
use crate::index::{IndexConfig, InvertedIndex};

/// Options for indexing a set of files.
#[derive(Debug, Clone, Default)]
pub struct IndexingOptions {
    /// Thread pool size. If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

/// Execute a CLI command.
pub fn execute_command(args: VortexArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            IndexConfig::from_json_file(path)?
        }
        None => IndexConfig::default(),
    };

    match &args.command {
        Command::Index(index_args) => index_directory(index_args, config, &args),
        Command::Search(search_args) => search_index(search_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
    }
}

/// Recursively collect every regular `.txt` file under `directory`.
///
/// Entries of each directory are visited in name order so that file ids are
/// stable across runs. Symlinks to regular files are collected, but symlinked
/// directories are never descended into, so a link cycle cannot repeat files.
pub fn collect_text_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(directory.as_ref(), &mut files)?;
    Ok(files)
}

fn collect_into(directory: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(directory)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        // DirEntry::file_type does not traverse symlinks.
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect_into(&path, files)?;
            continue;
        }

        let is_regular = if file_type.is_symlink() {
            fs::metadata(&path).is_ok_and(|meta| meta.is_file())
        } else {
            file_type.is_file()
        };
        if is_regular && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        } else if file_type.is_symlink() {
            debug!("Not following symlink {}", path.display());
        }
    }
    Ok(())
}

/// Index `paths` in parallel; the file at position `i` gets file id `i`.
///
/// A file that cannot be read is logged and skipped, but still consumes its
/// id so ids keep matching positions in `paths`. Invalid UTF-8 is replaced
/// with U+FFFD before indexing.
pub fn index_files(
    index: &InvertedIndex,
    paths: &[PathBuf],
    options: &IndexingOptions,
) -> Result<()> {
    if paths.len() > i32::MAX as usize {
        return Err(VortexError::invalid_argument(format!(
            "{} files exceed the file id range",
            paths.len()
        )));
    }

    let thread_pool_size = options.thread_pool_size.unwrap_or_else(num_cpus::get);
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_pool_size)
        .thread_name(|i| format!("vortex-index-{i}"))
        .build()
        .map_err(|e| VortexError::other(format!("Failed to create thread pool: {e}")))?;

    pool.install(|| {
        paths.par_iter().enumerate().for_each(|(file_id, path)| {
            match fs::read(path) {
                Ok(bytes) => {
                    index.add_document(file_id as i32, &String::from_utf8_lossy(&bytes));
                }
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        });
    });

    Ok(())
}

/// Order hits by frequency, highest first. Ties keep their insertion order.
pub fn sort_by_frequency(hits: &mut [Hit]) {
    hits.sort_by_key(|hit| Reverse(hit.frequency));
}

/// Index a directory, save it, reload it and run a verification query.
fn index_directory(args: &IndexArgs, config: IndexConfig, cli_args: &VortexArgs) -> Result<()> {
    if !args.directory.is_dir() {
        return Err(VortexError::not_found(format!(
            "directory {} does not exist",
            args.directory.display()
        )));
    }
    info!("Indexing directory: {}", args.directory.display());

    let start_time = Instant::now();
    let paths = collect_text_files(&args.directory)?;

    let index = InvertedIndex::with_config(config.clone());
    let options = IndexingOptions {
        thread_pool_size: args.threads,
    };
    index_files(&index, &paths, &options)?;
    let duration = start_time.elapsed();

    info!("Saving index to {}", args.output.display());
    index.try_save(&args.output)?;

    info!("Verifying load...");
    let loaded = InvertedIndex::with_config(config);
    loaded.try_load(&args.output)?;

    let search_start = Instant::now();
    let hits: Vec<Hit> = loaded
        .search(&args.query)
        .iter()
        .map(|posting| {
            let path = usize::try_from(posting.doc_id)
                .ok()
                .and_then(|id| paths.get(id))
                .map(|p| p.display().to_string());
            Hit::from_posting(posting, path)
        })
        .collect();

    output_result(
        "Directory indexed successfully",
        &IndexingResult {
            files_indexed: paths.len(),
            duration_ms: duration.as_millis() as u64,
            index_path: args.output.display().to_string(),
            stats: loaded.stats(),
            verification: SearchResults {
                term: args.query.clone(),
                hits,
                duration_ms: search_start.elapsed().as_millis() as u64,
            },
        },
        cli_args,
    )
}

/// Search a saved index.
fn search_index(args: &SearchArgs, config: IndexConfig, cli_args: &VortexArgs) -> Result<()> {
    let index = InvertedIndex::with_config(config);
    index.try_load(&args.index_path)?;

    let start_time = Instant::now();
    let mut hits: Vec<Hit> = index
        .search(&args.term)
        .iter()
        .map(|posting| Hit::from_posting(posting, None))
        .collect();
    if args.sort {
        sort_by_frequency(&mut hits);
    }

    output_result(
        "Search completed",
        &SearchResults {
            term: args.term.clone(),
            hits,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show statistics of a saved index.
fn show_stats(args: &StatsArgs, config: IndexConfig, cli_args: &VortexArgs) -> Result<()> {
    let index = InvertedIndex::with_config(config);
    index.try_load(&args.index_path)?;

    output_result(
        "Index statistics",
        &StatsResult {
            index_path: args.index_path.display().to_string(),
            stats: index.stats(),
        },
        cli_args,
    )
}
