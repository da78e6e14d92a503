use super::{renumber, BatchReport, CmdMessage, FileOutcome, FileStatus, MessageLevel, Mode};
use crate::error::NbresetError;
use crate::model::{has_notebook_suffix, FormatOptions};
use crate::store::NotebookStore;
use std::path::Path;

/// Processes every path in order, one at a time.
///
/// Paths without the `.ipynb` suffix are never opened. A failure on one path
/// is recorded in its outcome and the batch carries on with the next.
pub fn run<S: NotebookStore, P: AsRef<Path>>(
    store: &S,
    paths: &[P],
    format: FormatOptions,
    mode: Mode,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        let status = if has_notebook_suffix(path) {
            renumber::run(store, path, format, mode).unwrap_or_else(FileStatus::Failed)
        } else {
            FileStatus::Failed(NbresetError::NotANotebook(path.to_path_buf()))
        };

        report.add_message(describe(path, &status));
        report.outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status,
        });
    }

    report
}

fn describe(path: &Path, status: &FileStatus) -> CmdMessage {
    let shown = path.display();
    let (level, content) = match status {
        FileStatus::Renumbered(stats) => (
            MessageLevel::Success,
            format!("Renumbered [{}] ({} code cells).", shown, stats.code_cells),
        ),
        FileStatus::Unchanged(_) => (
            MessageLevel::Info,
            format!("[{}] is already numbered.", shown),
        ),
        FileStatus::WouldChange(_) => (
            MessageLevel::Warning,
            format!("Would renumber [{}].", shown),
        ),
        FileStatus::Failed(NbresetError::NotANotebook(_)) => (
            MessageLevel::Warning,
            format!("File at [{}] is not a Python notebook file.", shown),
        ),
        FileStatus::Failed(err) => (
            MessageLevel::Error,
            format!(
                "{} encountered when dealing with the file at [{}].",
                err, shown
            ),
        ),
    };
    CmdMessage::new(level, content)
}
