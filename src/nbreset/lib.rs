//! # Nbreset Architecture
//!
//! Nbreset rewrites the `execution_count` labels of a notebook so they follow
//! document order: the first code cell becomes `1`, the second `2`, and so on,
//! with every output that carries its own `execution_count` mirroring its cell.
//!
//! It is a small library with a CLI client on top, and the split is kept strict
//! so the renumbering logic can be tested without a terminal or a filesystem.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, picks the exit code   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns a structured BatchReport                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Counter assignment, per-file pipeline, batch isolation   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NotebookStore trait                                      │
//! │  - FsStore (production), MemStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Isolation
//!
//! Every path handed to the batch gets its own [`commands::FileOutcome`]. A
//! missing file, a malformed document or a path without the `.ipynb` suffix is
//! recorded for that path only and the batch moves on to the next one.
//!
//! ## Writes
//!
//! The rewritten document is serialised fully in memory and then swapped in
//! with a temp-file-and-rename, so a failure mid-write leaves the original
//! notebook as it was.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Renumbering logic, single-file pipeline and batch driver
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The notebook document wrapper
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
