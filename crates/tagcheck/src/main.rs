//! tagcheck - Entry Point
//!
//! Binary entry point for the fixture test runner. Lives in the `tagcheck`
//! facade crate next to the library it drives.
//!
//! ## Exit Status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Every rule file passed |
//! | 1 | At least one rule file failed |
//! | 2 | The run could not start (bad config, unknown `--file`) |

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tagcheck::app::{self, EXIT_ERROR};
use tagcheck::RunOptions;

/// Command line interface for tagcheck
#[derive(Parser, Debug)]
#[command(name = "tagcheck")]
#[command(about = "Run JSON fixtures against YARA tagcheck rules")]
#[command(version)]
pub struct Cli {
    /// Root directory searched for rule files [default: tagcheck]
    #[arg(long = "rules_dir", value_name = "PATH")]
    pub rules_dir: Option<PathBuf>,

    /// Test only this rule file, by path, file name or stem
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Do not print files whose tests all passed
    #[arg(long)]
    pub skip_ok: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Print the declared external variables with their defaults and exit
    #[arg(long)]
    pub list_externals: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            rules_dir: cli.rules_dir,
            file: cli.file,
            skip_ok: cli.skip_ok,
            no_color: cli.no_color,
            list_externals: cli.list_externals,
        }
    }
}

fn main() -> ExitCode {
    let options = RunOptions::from(Cli::parse());
    let stdout = std::io::stdout();

    let status = match app::run(&options, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_status(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };
    ExitCode::from(status)
}
