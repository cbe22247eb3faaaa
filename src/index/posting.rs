//! Postings: the per-document records attached to every indexed term.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VortexError};
use crate::storage::structured::{StructReader, StructWriter};
use crate::storage::{StorageInput, StorageOutput};

/// Encoded size of one posting: two adjacent 32-bit integers.
pub const POSTING_SIZE: usize = 8;

/// How many times a term occurs in one submitted document.
///
/// The layout is `#[repr(C)]` with no padding, matching the on-disk record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    /// Caller-assigned document identifier.
    pub doc_id: i32,
    /// Term frequency in the document.
    pub frequency: i32,
}

const _: () = assert!(std::mem::size_of::<Posting>() == POSTING_SIZE);

impl Posting {
    /// Create a new posting.
    pub fn new(doc_id: i32, frequency: i32) -> Self {
        Posting { doc_id, frequency }
    }
}

/// The postings of one term, in the order their documents were merged.
///
/// Appending never merges or deduplicates: submitting the same document
/// twice yields two postings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a posting.
    pub fn push(&mut self, posting: Posting) {
        self.postings.push(posting);
    }

    /// Get the length of the posting list.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the posting list is empty.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get an iterator over the postings.
    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }

    /// Borrow the postings as a slice.
    pub fn as_slice(&self) -> &[Posting] {
        &self.postings
    }

    /// Sum of frequencies over all postings.
    pub fn total_frequency(&self) -> u64 {
        self.postings
            .iter()
            .map(|p| p.frequency.max(0) as u64)
            .sum()
    }

    /// Encode the list as a u64 count followed by one contiguous block of
    /// `(doc_id, frequency)` records.
    pub fn encode<W: StorageOutput>(&self, writer: &mut StructWriter<W>) -> Result<()> {
        writer.write_u64(self.postings.len() as u64)?;

        let values: Vec<i32> = self
            .postings
            .iter()
            .flat_map(|posting| [posting.doc_id, posting.frequency])
            .collect();
        writer.write_i32_block(&values)
    }

    /// Decode a list written by [`encode`](Self::encode).
    pub fn decode<R: StorageInput>(reader: &mut StructReader<R>) -> Result<Self> {
        let count = reader.read_u64()?;
        let values = count
            .checked_mul(2)
            .ok_or_else(|| VortexError::corrupted(format!("posting count {count} overflows")))?;
        let block = reader.read_i32_block(values)?;

        let postings = block
            .chunks_exact(2)
            .map(|record| Posting::new(record[0], record[1]))
            .collect();

        Ok(PostingList { postings })
    }
}

impl From<Vec<Posting>> for PostingList {
    fn from(postings: Vec<Posting>) -> Self {
        PostingList { postings }
    }
}

impl From<PostingList> for Vec<Posting> {
    fn from(list: PostingList) -> Self {
        list.postings
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}
