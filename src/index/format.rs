//! On-disk layout of a saved index.
//!
//! ```text
//! u64 term_count
//! term_count × {
//!     u64 term_len
//!     [u8; term_len] term bytes (UTF-8, no terminator)
//!     u64 posting_count
//!     posting_count × { i32 doc_id, i32 frequency }
//! }
//! ```
//!
//! Integers are little-endian. There is no header, version tag or checksum;
//! terms appear in the map's iteration order at save time and postings keep
//! their insertion order. Readers reject any count or length that does not
//! fit in the remaining input, and any bytes left after the last term.
//! A term whose bytes are not valid UTF-8 (e.g. one written from Latin-1
//! text by another producer of this layout) fails the whole load.

use ahash::AHashMap;
use log::debug;

use crate::error::{Result, VortexError};
use crate::index::posting::{POSTING_SIZE, PostingList};
use crate::storage::structured::{StructReader, StructWriter};
use crate::storage::{StorageInput, StorageOutput};

/// The in-memory form of an index: term → postings.
pub type TermMap = AHashMap<String, PostingList>;

/// Smallest possible encoding of one term entry: both length prefixes and
/// one posting.
const MIN_ENTRY_SIZE: u64 = 8 + 8 + POSTING_SIZE as u64;

/// Write every term of `terms` to `output`, returning the output once it has
/// been flushed.
pub fn write_index<W: StorageOutput>(terms: &TermMap, output: W) -> Result<W> {
    let mut writer = StructWriter::new(output);
    writer.write_u64(terms.len() as u64)?;

    for (term, postings) in terms.iter() {
        writer.write_len_prefixed(term.as_bytes())?;
        postings.encode(&mut writer)?;
    }

    debug!(
        "wrote {} terms ({} bytes)",
        terms.len(),
        writer.position()
    );
    writer.finish()
}

/// Read a complete index from `input`.
pub fn read_index<R: StorageInput>(input: R) -> Result<TermMap> {
    let mut reader = StructReader::new(input)?;
    let term_count = reader.read_u64()?;

    let max_terms = reader.remaining() / MIN_ENTRY_SIZE;
    if term_count > max_terms {
        return Err(VortexError::corrupted(format!(
            "term count {term_count} cannot fit in {} bytes",
            reader.remaining()
        )));
    }

    let mut terms = TermMap::with_capacity(term_count as usize);
    for _ in 0..term_count {
        let bytes = reader.read_len_prefixed()?;
        let term = String::from_utf8(bytes)
            .map_err(|e| VortexError::corrupted(format!("term is not valid UTF-8: {e}")))?;

        let postings = PostingList::decode(&mut reader)?;
        if postings.is_empty() {
            return Err(VortexError::corrupted(format!(
                "term {term:?} has no postings"
            )));
        }

        if terms.insert(term, postings).is_some() {
            return Err(VortexError::corrupted("duplicate term"));
        }
    }

    if !reader.is_eof() {
        return Err(VortexError::corrupted(format!(
            "{} trailing bytes after the last term",
            reader.remaining()
        )));
    }

    debug!("read {} terms ({} bytes)", terms.len(), reader.size());
    Ok(terms)
}
