//! Structured binary I/O for index serialization.
//!
//! All multi-byte integers are fixed-width little-endian. The reader never
//! trusts a length read from its input: every read is checked against the
//! number of bytes left, so a truncated or corrupted file produces
//! [`VortexError::Corrupted`] instead of a huge allocation.

use std::io::{Read, Write};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Result, VortexError};
use crate::storage::{StorageInput, StorageOutput};

/// A structured file writer for binary data.
pub struct StructWriter<W: StorageOutput> {
    writer: W,
    position: u64,
}

impl<W: StorageOutput> StructWriter<W> {
    /// Create a new structured file writer.
    pub fn new(writer: W) -> Self {
        StructWriter {
            writer,
            position: 0,
        }
    }

    /// Write a u64 value (little-endian).
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.writer.write_u64::<LittleEndian>(value)?;
        self.position += 8;
        Ok(())
    }

    /// Write a slice of i32 values as one contiguous little-endian block.
    pub fn write_i32_block(&mut self, values: &[i32]) -> Result<()> {
        let mut block = vec![0u8; values.len() * 4];
        LittleEndian::write_i32_into(values, &mut block);
        self.write_raw(&block)
    }

    /// Write raw bytes without length prefix.
    pub fn write_raw(&mut self, value: &[u8]) -> Result<()> {
        self.writer.write_all(value)?;
        self.position += value.len() as u64;
        Ok(())
    }

    /// Write bytes preceded by their length as a u64.
    pub fn write_len_prefixed(&mut self, value: &[u8]) -> Result<()> {
        self.write_u64(value.len() as u64)?;
        self.write_raw(value)
    }

    /// Get current file position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Flush, sync and hand back the underlying output.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush_and_sync()?;
        Ok(self.writer)
    }
}

/// A structured file reader for binary data.
pub struct StructReader<R: StorageInput> {
    reader: R,
    position: u64,
    file_size: u64,
}

impl<R: StorageInput> StructReader<R> {
    /// Create a new structured file reader.
    pub fn new(reader: R) -> Result<Self> {
        let file_size = reader.size()?;
        Ok(StructReader {
            reader,
            position: 0,
            file_size,
        })
    }

    /// Read a u64 value (little-endian).
    pub fn read_u64(&mut self) -> Result<u64> {
        self.ensure(8, "u64")?;
        let value = self.reader.read_u64::<LittleEndian>()?;
        self.position += 8;
        Ok(value)
    }

    /// Read `count` little-endian i32 values written by
    /// [`StructWriter::write_i32_block`].
    pub fn read_i32_block(&mut self, count: u64) -> Result<Vec<i32>> {
        let length = count
            .checked_mul(4)
            .ok_or_else(|| VortexError::corrupted(format!("i32 count {count} overflows")))?;
        self.ensure(length, "i32 block")?;
        let mut values = vec![0i32; count as usize];
        self.reader.read_i32_into::<LittleEndian>(&mut values)?;
        self.position += length;
        Ok(values)
    }

    /// Read exact number of raw bytes.
    pub fn read_raw(&mut self, length: u64) -> Result<Vec<u8>> {
        self.ensure(length, "raw bytes")?;
        let mut bytes = vec![0u8; length as usize];
        self.reader.read_exact(&mut bytes)?;
        self.position += length;
        Ok(bytes)
    }

    /// Read bytes preceded by their length as a u64.
    pub fn read_len_prefixed(&mut self) -> Result<Vec<u8>> {
        let length = self.read_u64()?;
        self.read_raw(length)
    }

    /// Get current file position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get file size.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    /// Bytes left between the current position and the end of the input.
    pub fn remaining(&self) -> u64 {
        self.file_size.saturating_sub(self.position)
    }

    /// Check if we're at end of file.
    pub fn is_eof(&self) -> bool {
        self.position >= self.file_size
    }

    /// Fail with a corruption error unless `needed` more bytes are available.
    pub fn ensure(&self, needed: u64, what: &str) -> Result<()> {
        if needed > self.remaining() {
            return Err(VortexError::corrupted(format!(
                "expected {needed} bytes of {what} at offset {}, only {} left",
                self.position,
                self.remaining()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{MemoryInput, MemoryOutput};

    #[test]
    fn test_write_then_read() {
        let mut writer = StructWriter::new(MemoryOutput::new());
        writer.write_u64(3).unwrap();
        writer.write_i32_block(&[-7, 9]).unwrap();
        writer.write_len_prefixed(b"abc").unwrap();
        assert_eq!(writer.position(), 8 + 8 + 8 + 3);
        let bytes = writer.finish().unwrap().into_inner();

        assert_eq!(&bytes[..8], &[3, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &(-7i32).to_le_bytes());
        assert_eq!(&bytes[12..16], &9i32.to_le_bytes());

        let mut reader = StructReader::new(MemoryInput::new(bytes)).unwrap();
        assert_eq!(reader.size(), 27);
        assert_eq!(reader.read_u64().unwrap(), 3);
        assert_eq!(reader.read_i32_block(2).unwrap(), vec![-7, 9]);
        assert_eq!(reader.read_len_prefixed().unwrap(), b"abc");
        assert!(reader.is_eof());
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_short_read_is_corruption() {
        let mut reader = StructReader::new(MemoryInput::new(vec![1, 2, 3])).unwrap();
        let err = reader.read_u64().unwrap_err();
        assert!(err.is_corruption());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_i32_block_bounds() {
        let mut reader = StructReader::new(MemoryInput::new(vec![0u8; 12])).unwrap();
        assert!(reader.read_i32_block(4).unwrap_err().is_corruption());
        assert!(reader.read_i32_block(u64::MAX).unwrap_err().is_corruption());
        assert_eq!(reader.read_i32_block(3).unwrap(), vec![0, 0, 0]);
        assert!(reader.is_eof());
    }

    #[test]
    fn test_oversized_length_is_rejected_before_allocation() {
        let mut bytes = u64::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"xy");

        let mut reader = StructReader::new(MemoryInput::new(bytes)).unwrap();
        let err = reader.read_len_prefixed().unwrap_err();
        assert!(err.is_corruption());
    }
}
