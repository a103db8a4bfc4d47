//! Molint CLI binary entry point.
//! Delegates to library modules for checking and printing results.

use clap::Parser;
use molint::cli::{Cli, Commands};
use molint::output::{error_prefix, note_prefix};
use molint::{config, lint, output};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            root,
            ext,
            output: out_mode,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                root.as_deref(),
                ext.as_deref(),
                out_mode.as_deref(),
            );
            // Friendly note if no molint config was found
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!("{} {}", note_prefix(), "No molint.toml found; using defaults.");
            }
            // Missing root or an unusable pattern is fatal before any file
            // is processed.
            let result = match lint::run_lint(&eff.root, &eff.ext) {
                Ok(res) => res,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(1);
                }
            };
            output::print_lint(&result, &eff.output);
            let code = lint::exit_code(&result.summary);
            if code != 0 {
                std::process::exit(code);
            }
        }
    }
}
