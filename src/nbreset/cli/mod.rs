//! Everything terminal-facing: argument parsing, context wiring, printing and
//! the exit code. The library below never writes to stdout or stderr.

mod print;
mod setup;

use clap::Parser;
use nbreset::api::NbresetApi;
use nbreset::config::{global_config_dir, NbresetConfig};
use nbreset::error::Result;
use nbreset::store::fs::FsStore;
use print::{print_messages, print_summary};
use setup::Cli;
use std::path::PathBuf;

/// Exit code when any path failed or, with `--check`, any notebook would change.
pub const EXIT_DIRTY: i32 = 1;

pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let api = init_api(&cli)?;

    let report = if cli.check {
        api.check(cli.paths.as_slice())
    } else {
        api.renumber(cli.paths.as_slice())
    };

    print_messages(&report.messages, cli.verbose);
    if cli.verbose {
        print_summary(&report, cli.check);
    }

    Ok(if report.is_clean() { 0 } else { EXIT_DIRTY })
}

fn init_api(cli: &Cli) -> Result<NbresetApi<FsStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = NbresetConfig::discover(&cwd, global_config_dir().as_deref())?;
    if let Some(indent) = cli.indent {
        config.indent = usize::from(indent);
    }
    Ok(NbresetApi::new(FsStore::new(), config))
}
