//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest, then the doctests.
    Test,
    /// Run the engine benchmarks.
    Bench {
        /// Only run benchmarks whose name matches this filter.
        filter: Option<String>,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();
        Ok(Self { root })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench { filter } => bench(&paths, filter.as_deref()),
    }
}

/// Workspace crates formatted and linted by `tidy`.
const CRATES: [&str; 3] = ["superpalette", "spal", "xtask"];

/// Format and lint every workspace crate, then format the fixes.
fn tidy(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    for krate in CRATES {
        cmd!(sh, "cargo +nightly fmt -p {krate}").run()?;
        cmd!(
            sh,
            "cargo clippy -q --fix -p {krate} --all-targets --all-features --allow-dirty"
        )
        .run()?;
    }
    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run tests using cargo nextest. Nextest skips doctests, so run those too.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all --all-features").run()?;
    cmd!(sh, "cargo test --doc -p superpalette --all-features").run()?;
    Ok(())
}

/// Run the criterion benchmarks of the engine crate.
fn bench(paths: &RepoPaths, filter: Option<&str>) -> Result<()> {
    let sh = repo_shell(paths)?;
    let filter: Vec<&str> = filter.into_iter().collect();
    cmd!(sh, "cargo bench -p superpalette --bench engine -- {filter...}").run()?;
    Ok(())
}

/// Create a shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}
