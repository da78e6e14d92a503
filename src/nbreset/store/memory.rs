use super::NotebookStore;
use crate::error::{NbresetError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory notebook storage for testing.
///
/// Uses `RefCell` for interior mutability since nbreset is single-threaded,
/// which lets the `NotebookStore` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemStore {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    touched: RefCell<Vec<PathBuf>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    /// Current content of a file as text, if it exists.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Every path a read or write was attempted on, in call order.
    pub fn touched(&self) -> Vec<PathBuf> {
        self.touched.borrow().clone()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl NotebookStore for MemStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.touched.borrow_mut().push(path.to_path_buf());
        let read_err = |source| NbresetError::Read {
            path: path.to_path_buf(),
            source,
        };

        if *self.simulate_read_error.borrow() {
            return Err(read_err(io::Error::other("simulated read error")));
        }

        let files = self.files.borrow();
        let bytes = files
            .get(path)
            .ok_or_else(|| read_err(io::Error::new(io::ErrorKind::NotFound, "file not found")))?;
        String::from_utf8(bytes.clone())
            .map_err(|e| read_err(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.touched.borrow_mut().push(path.to_path_buf());

        if *self.simulate_write_error.borrow() {
            return Err(NbresetError::Write {
                path: path.to_path_buf(),
                source: io::Error::other("simulated write error"),
            });
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
