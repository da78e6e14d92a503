//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! It dispatches to [`commands::batch`] with the configured layout and returns
//! the structured [`BatchReport`]. It never prints and never exits.
//!
//! ## Generic Over NotebookStore
//!
//! - Production: `NbresetApi<FsStore>`
//! - Testing: `NbresetApi<MemStore>`

use crate::commands;
use crate::config::NbresetConfig;
use crate::store::NotebookStore;
use std::path::Path;

pub struct NbresetApi<S: NotebookStore> {
    store: S,
    config: NbresetConfig,
}

impl<S: NotebookStore> NbresetApi<S> {
    pub fn new(store: S, config: NbresetConfig) -> Self {
        Self { store, config }
    }

    /// Renumber each notebook in place.
    pub fn renumber<P: AsRef<Path>>(&self, paths: &[P]) -> BatchReport {
        commands::batch::run(&self.store, paths, self.config.format(), Mode::Write)
    }

    /// Report which notebooks a renumber would rewrite, without writing.
    pub fn check<P: AsRef<Path>>(&self, paths: &[P]) -> BatchReport {
        commands::batch::run(&self.store, paths, self.config.format(), Mode::Check)
    }

    pub fn config(&self) -> &NbresetConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{
    BatchReport, CmdMessage, FileOutcome, FileStatus, MessageLevel, Mode, RenumberStats,
};
