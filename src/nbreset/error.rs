use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NbresetError {
    #[error("Not a notebook file: {}", .0.display())]
    NotANotebook(PathBuf),

    #[error("Read error: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed notebook: {reason}")]
    Shape { path: PathBuf, reason: String },

    #[error("Serialization error: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Write error: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NbresetError>;
