//! Storage layer for persisted indexes.
//!
//! Index files are read through [`StorageInput`] and written through
//! [`StorageOutput`], so the same codec serves files on disk and in-memory
//! buffers.

pub mod file;
pub mod memory;
pub mod structured;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use structured::*;
pub use traits::*;
