use super::{FileStatus, Mode};
use crate::error::{NbresetError, Result};
use crate::model::{
    cell_object, FormatOptions, Notebook, ShapeError, CELL_TYPE_KEY, CODE_CELL,
    EXECUTION_COUNT_KEY, OUTPUTS_KEY,
};
use crate::store::NotebookStore;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenumberStats {
    /// Code cells that received a counter.
    pub code_cells: u64,
    /// Outputs whose `execution_count` was synced to their cell.
    pub synced_outputs: usize,
    /// Whether any counter value differs from what the document held before.
    pub changed: bool,
}

/// Assigns 1, 2, 3, ... to the code cells in document order and copies each
/// cell's value onto those of its outputs that carry an `execution_count`.
///
/// Non-code cells are skipped without being inspected beyond `cell_type`.
/// On a shape error the document may be partially renumbered; callers drop it.
pub fn renumber_cells(
    notebook: &mut Notebook,
) -> std::result::Result<RenumberStats, ShapeError> {
    let mut stats = RenumberStats::default();
    let mut counter: u64 = 1;

    for (position, cell) in notebook.cells_mut()?.iter_mut().enumerate() {
        let cell = cell_object(cell, position)?;
        let is_code = match cell.get(CELL_TYPE_KEY) {
            Some(Value::String(kind)) => kind == CODE_CELL,
            Some(_) => false,
            None => {
                return Err(ShapeError(format!(
                    "cell {} has no '{}'",
                    position, CELL_TYPE_KEY
                )))
            }
        };
        if !is_code {
            continue;
        }

        let count = Value::from(counter);
        if cell.get(EXECUTION_COUNT_KEY) != Some(&count) {
            stats.changed = true;
        }
        cell.insert(EXECUTION_COUNT_KEY.to_string(), count.clone());

        let outputs = match cell.get_mut(OUTPUTS_KEY) {
            Some(Value::Array(outputs)) => outputs,
            Some(_) => {
                return Err(ShapeError(format!(
                    "'{}' of code cell {} is not a list",
                    OUTPUTS_KEY, position
                )))
            }
            None => {
                return Err(ShapeError(format!(
                    "code cell {} has no '{}'",
                    position, OUTPUTS_KEY
                )))
            }
        };
        for (index, output) in outputs.iter_mut().enumerate() {
            let output = output.as_object_mut().ok_or_else(|| {
                ShapeError(format!(
                    "output {} of code cell {} is not an object",
                    index, position
                ))
            })?;
            if let Some(slot) = output.get_mut(EXECUTION_COUNT_KEY) {
                if *slot != count {
                    stats.changed = true;
                }
                *slot = count.clone();
                stats.synced_outputs += 1;
            }
        }

        stats.code_cells += 1;
        counter += 1;
    }

    Ok(stats)
}

/// Renumbers a single notebook file.
///
/// The new document is serialized fully in memory before anything is written.
/// If it matches the file byte for byte nothing is written at all.
/// In [`Mode::Check`] the file is never written.
pub fn run<S: NotebookStore>(
    store: &S,
    path: &Path,
    format: FormatOptions,
    mode: Mode,
) -> Result<FileStatus> {
    let original = store.read_text(path)?;

    let mut notebook = Notebook::parse(&original).map_err(|source| NbresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let stats = renumber_cells(&mut notebook).map_err(|e| NbresetError::Shape {
        path: path.to_path_buf(),
        reason: e.0,
    })?;

    let rendered = notebook
        .to_bytes(format)
        .map_err(|source| NbresetError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    if rendered == original.as_bytes() {
        return Ok(FileStatus::Unchanged(stats));
    }

    match mode {
        Mode::Check => Ok(FileStatus::WouldChange(stats)),
        Mode::Write => {
            store.write_atomic(path, &rendered)?;
            Ok(FileStatus::Renumbered(stats))
        }
    }
}
