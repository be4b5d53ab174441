//! load-versions — write `_data/properties.yml` from the `*.properties`
//! descriptors in a directory.
//!
//! With no arguments it scans the working directory and writes the default
//! data file, which is what a site build runs before generating pages:
//!
//! - `load-versions`
//! - `load-versions -C site -f json --stdout`

use anyhow::{Context, Result};
use clap::Parser;
use load_versions::{run_with, Options, DEFAULT_FORMAT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "load-versions",
    about = "Collect group/name/version from *.properties files into a site data file"
)]
struct Cli {
    /// Directory to scan for *.properties files (not recursive)
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,

    /// Output file (default: <DIR>/_data/properties.<ext>).
    /// The parent directory must exist.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: yaml (default), json
    #[arg(short = 'f', long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Print the catalog to stdout instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options {
        dir: cli.dir,
        output: cli.output,
        format: cli.format,
        to_stdout: cli.stdout,
    };
    run_with(&options)
        .with_context(|| format!("failed to build catalog from {}", options.dir.display()))?;

    Ok(())
}
