//! In-memory storage implementation for testing and in-process snapshots.

use std::io::{Cursor, Read, Write};

use crate::error::Result;
use crate::storage::traits::{StorageInput, StorageOutput};

/// A read-only input over an owned byte buffer.
#[derive(Debug)]
pub struct MemoryInput {
    cursor: Cursor<Vec<u8>>,
}

impl MemoryInput {
    /// Create an input that reads `data` from the beginning.
    pub fn new(data: Vec<u8>) -> Self {
        MemoryInput {
            cursor: Cursor::new(data),
        }
    }
}

impl Read for MemoryInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl StorageInput for MemoryInput {
    fn size(&self) -> Result<u64> {
        Ok(self.cursor.get_ref().len() as u64)
    }
}

/// An output that accumulates written bytes in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    buffer: Vec<u8>,
}

impl MemoryOutput {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the output, returning the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for MemoryOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl StorageOutput for MemoryOutput {
    fn flush_and_sync(&mut self) -> Result<()> {
        Ok(())
    }

    fn position(&self) -> u64 {
        self.buffer.len() as u64
    }
}
