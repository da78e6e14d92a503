//! # Storage Layer
//!
//! The [`NotebookStore`] trait is the only way the command layer touches notebook
//! files. It deals in whole documents: read everything, write everything.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production filesystem storage
//!   - Writes go to a sibling `.<name>-<uuid>.tmp` file which is then renamed
//!     over the target, so readers see either the old or the new notebook
//!   - Symlinks are followed, the file they point at is replaced
//!
//! - [`memory::MemStore`]: In-memory storage for testing
//!   - Records every path it is asked to read or write
//!   - Can simulate read and write failures

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for notebook file I/O.
pub trait NotebookStore {
    /// Read the whole file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace the whole file with `content`.
    /// MUST be atomic: on failure the previous content stays intact, and on
    /// success no byte of the previous content remains.
    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()>;
}
