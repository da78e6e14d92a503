//! # Nbreset CLI
//!
//! The binary is intentionally thin: argument parsing and printing live in
//! `cli/`, while this file only invokes `cli::run()` and turns its result into
//! a process exit code.
//!
//! ```text
//! nbreset [--check] [--indent N] [-v] [PATHS]...
//! ```
//!
//! Exit codes: `0` when every path was processed cleanly, `1` when any path
//! failed (or, with `--check`, when any notebook would be rewritten), `2` for
//! usage errors reported by clap.

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
