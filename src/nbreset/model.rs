use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// The suffix a path must literally end with to be treated as a notebook.
pub const NOTEBOOK_SUFFIX: &str = ".ipynb";

pub const CELLS_KEY: &str = "cells";
pub const CELL_TYPE_KEY: &str = "cell_type";
pub const OUTPUTS_KEY: &str = "outputs";
pub const EXECUTION_COUNT_KEY: &str = "execution_count";
pub const CODE_CELL: &str = "code";

/// Widest indentation accepted for rewritten notebooks.
pub const MAX_INDENT: usize = 16;

/// Returns true when the last six bytes of the path are exactly `.ipynb`.
///
/// This is a literal suffix match: `.IPYNB` or `notebook.ipynb/` do not qualify.
pub fn has_notebook_suffix(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(NOTEBOOK_SUFFIX.as_bytes())
}

/// The document parsed but does not have the structure a notebook needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ShapeError(pub String);

/// How the rewritten document is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: usize,
    pub trailing_newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            trailing_newline: false,
        }
    }
}

/// A notebook document held fully in memory.
///
/// Only the `cells` list and the `execution_count` fields below it are ever
/// interpreted; everything else is carried as raw JSON in its original key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    root: Value,
}

impl Notebook {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let root = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Mutable access to the top-level `cells` list.
    pub fn cells_mut(&mut self) -> Result<&mut Vec<Value>, ShapeError> {
        let root = self
            .root
            .as_object_mut()
            .ok_or_else(|| ShapeError("top-level value is not an object".to_string()))?;
        match root.get_mut(CELLS_KEY) {
            Some(Value::Array(cells)) => Ok(cells),
            Some(_) => Err(ShapeError(format!("'{}' is not a list", CELLS_KEY))),
            None => Err(ShapeError(format!("missing '{}' field", CELLS_KEY))),
        }
    }

    /// Serializes the whole document with the given layout.
    pub fn to_bytes(&self, format: FormatOptions) -> serde_json::Result<Vec<u8>> {
        if format.indent > MAX_INDENT {
            return Err(serde::ser::Error::custom(format!(
                "indent {} exceeds the maximum of {}",
                format.indent, MAX_INDENT
            )));
        }
        let indent = " ".repeat(format.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut ser)?;
        if format.trailing_newline {
            buf.push(b'\n');
        }
        Ok(buf)
    }
}

/// Returns the cell's object map, or a shape error naming its position.
pub fn cell_object(
    cell: &mut Value,
    position: usize,
) -> Result<&mut Map<String, Value>, ShapeError> {
    cell.as_object_mut()
        .ok_or_else(|| ShapeError(format!("cell {} is not an object", position)))
}
