use clap::Parser;
use nbreset::model::MAX_INDENT;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "nbreset", bin_name = "nbreset", version = get_version())]
#[command(
    about = "Renumber notebook code cells in document order",
    long_about = "Rewrites the execution_count of every code cell (and of the outputs that \
                  carry one) to 1, 2, 3, ... in document order, saving each .ipynb file in place."
)]
pub struct Cli {
    /// Notebook files to renumber (must end in .ipynb)
    pub paths: Vec<PathBuf>,

    /// Report notebooks that would change without writing them
    #[arg(long)]
    pub check: bool,

    /// Spaces per indentation level in rewritten files
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(0..=MAX_INDENT as i64)
    )]
    pub indent: Option<u8>,

    /// Print a line per notebook and a final summary
    #[arg(short, long)]
    pub verbose: bool,
}
