use crate::error::NbresetError;
use std::path::PathBuf;

pub mod batch;
pub mod renumber;

pub use renumber::RenumberStats;

/// Whether a batch rewrites notebooks or only reports what it would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

/// What happened to one path of a batch.
#[derive(Debug)]
pub enum FileStatus {
    /// The notebook was rewritten on disk.
    Renumbered(RenumberStats),
    /// The rewrite would have produced the exact bytes already on disk.
    Unchanged(RenumberStats),
    /// Check mode only: the notebook would be rewritten.
    WouldChange(RenumberStats),
    Failed(NbresetError),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// Per-path outcomes of one batch, in input order, plus the messages to show.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl BatchReport {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    pub fn renumbered(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Renumbered(_)))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Unchanged(_)))
    }

    pub fn would_change(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::WouldChange(_)))
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// True when no path failed and, in check mode, nothing needs rewriting.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.would_change() == 0
    }
}
