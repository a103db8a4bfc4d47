//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "molint",
    version,
    about = "Structural linter for Modelica source trees",
    long_about = "Molint — a small, fast structural checker for Modelica-like source files.\n\nIt catches obvious mistakes (unbalanced brackets, mismatched block definitions, missing required sections) before files are handed to a full modeling environment. It does not parse or simulate.\n\nConfiguration precedence: CLI > molint.toml > defaults.",
    after_help = "Examples:\n  molint check\n  molint check --root CryoSystem --ext mo\n  molint check --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current molint version.")]
    Version,
    /// Run structural checks over a source tree
    #[command(
        about = "Run structural checks",
        long_about = "Scan every matching file under the configured root and report structural errors and warnings. Exits non-zero when errors are found.",
        after_help = "Examples:\n  molint check --root CryoSystem\n  molint check --ext mo --output json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Directory to scan (default: CryoSystem)")]
        root: Option<String>,
        #[arg(long, help = "Source file extension to match (default: mo)")]
        ext: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
