//! Storage abstraction traits and common types.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A trait for reading persisted index data.
pub trait StorageInput: Read + Send + std::fmt::Debug {
    /// Total size of the input in bytes.
    fn size(&self) -> Result<u64>;
}

/// A trait for writing persisted index data.
pub trait StorageOutput: Write + Send + std::fmt::Debug {
    /// Flush buffered bytes and, where the backend supports it, sync them to
    /// durable storage.
    fn flush_and_sync(&mut self) -> Result<()>;

    /// Number of bytes written so far.
    fn position(&self) -> u64;
}

/// Configuration for storage backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Buffer size for I/O operations.
    pub buffer_size: usize,

    /// Whether to fsync the file after it has been written.
    pub sync_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            buffer_size: 65536, // 64KB buffer for better I/O performance
            sync_writes: false,
        }
    }
}
