//! File-based storage implementation.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Result, VortexError};
use crate::storage::traits::{StorageConfig, StorageInput, StorageOutput};

/// A buffered, read-only view of an index file.
#[derive(Debug)]
pub struct FileInput {
    reader: BufReader<File>,
    size: u64,
}

impl FileInput {
    /// Open `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P, config: &StorageConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let metadata = file
            .metadata()
            .map_err(|e| VortexError::storage(format!("Failed to get file metadata: {e}")))?;

        let size = metadata.len();
        let reader = BufReader::with_capacity(config.buffer_size, file);

        Ok(FileInput { reader, size })
    }
}

impl Read for FileInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl StorageInput for FileInput {
    fn size(&self) -> Result<u64> {
        Ok(self.size)
    }
}

/// A buffered writer for an index file. Creating it truncates the file.
#[derive(Debug)]
pub struct FileOutput {
    writer: BufWriter<File>,
    sync_writes: bool,
    position: u64,
}

impl FileOutput {
    /// Create (or truncate) `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P, config: &StorageConfig) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;

        Ok(FileOutput {
            writer: BufWriter::with_capacity(config.buffer_size, file),
            sync_writes: config.sync_writes,
            position: 0,
        })
    }
}

impl Write for FileOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let bytes_written = self.writer.write(buf)?;
        self.position += bytes_written as u64;
        Ok(bytes_written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl StorageOutput for FileOutput {
    fn flush_and_sync(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| VortexError::storage(format!("Failed to flush: {e}")))?;

        if self.sync_writes {
            self.writer
                .get_ref()
                .sync_all()
                .map_err(|e| VortexError::storage(format!("Failed to sync: {e}")))?;
        }

        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_output_then_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        let config = StorageConfig::default();

        let mut output = FileOutput::create(&path, &config).unwrap();
        output.write_all(b"Hello, World!").unwrap();
        assert_eq!(output.position(), 13);
        output.flush_and_sync().unwrap();
        drop(output);

        let mut input = FileInput::open(&path, &config).unwrap();
        assert_eq!(input.size().unwrap(), 13);

        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer).unwrap();
        assert_eq!(buffer, b"Hello, World!");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileInput::open(temp_dir.path().join("missing"), &StorageConfig::default());

        assert!(matches!(result, Err(VortexError::Io(_))));
    }

    #[test]
    fn test_create_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        std::fs::write(&path, b"a much longer previous content").unwrap();

        let config = StorageConfig {
            sync_writes: true,
            ..StorageConfig::default()
        };
        let mut output = FileOutput::create(&path, &config).unwrap();
        output.write_all(b"new").unwrap();
        output.flush_and_sync().unwrap();
        drop(output);

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }
}
