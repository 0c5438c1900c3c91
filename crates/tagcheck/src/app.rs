//! Application wiring.
//!
//! Loads layered configuration, applies command-line overrides, runs the
//! harness with the yara-x engine and turns the totals into an exit status.

use anyhow::Context;
use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tagcheck_domain::value_objects::{ExternalVariableSet, RunSummary};
use tagcheck_harness::{Reporter, RuleTester};
use tagcheck_infrastructure::constants::NO_COLOR_ENV;
use tagcheck_infrastructure::logging::log_config_loaded;
use tagcheck_infrastructure::{init_logging, AppConfig, ConfigLoader, YaraEngine};
use tracing::info;

/// Exit status when every file passed
pub const EXIT_PASSED: u8 = 0;
/// Exit status when at least one file failed
pub const EXIT_FAILED: u8 = 1;
/// Exit status for errors that prevent a run
pub const EXIT_ERROR: u8 = 2;

/// Command-line choices, already parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    /// Root to search, overriding `harness.rules_dir`
    pub rules_dir: Option<PathBuf>,
    /// Restrict the run to one rule file
    pub file: Option<String>,
    /// Hide fully passing files
    pub skip_ok: bool,
    /// Force plain output
    pub no_color: bool,
    /// Print the declared external variables instead of running
    pub list_externals: bool,
}

/// What a completed invocation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// External variables were listed
    Listed,
    /// Fixtures ran with these totals
    Tested(RunSummary),
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Tested(summary) if !summary.passed() => EXIT_FAILED,
            _ => EXIT_PASSED,
        }
    }
}

/// Loader honouring `--config`
pub fn config_loader(options: &RunOptions) -> ConfigLoader {
    match &options.config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Load configuration and fold the command-line overrides into it
pub fn load_config(options: &RunOptions) -> anyhow::Result<AppConfig> {
    load_with(&config_loader(options), options)
}

fn load_with(loader: &ConfigLoader, options: &RunOptions) -> anyhow::Result<AppConfig> {
    let mut config = loader.load().context("Failed to load configuration")?;

    if let Some(rules_dir) = &options.rules_dir {
        config.harness.rules_dir = rules_dir.clone();
    }
    config.output.color = color_enabled(
        config.output.color,
        options.no_color,
        std::env::var_os(NO_COLOR_ENV).as_deref(),
    );

    Ok(config)
}

/// Colour stays on only if config, flag and `NO_COLOR` all allow it
///
/// A `NO_COLOR` that is set but empty does not disable colour.
pub fn color_enabled(
    configured: bool,
    no_color_flag: bool,
    no_color_env: Option<&OsStr>,
) -> bool {
    configured && !no_color_flag && no_color_env.is_none_or(OsStr::is_empty)
}

/// Run the harness, writing the report to `out`
pub fn execute<W: Write>(
    options: &RunOptions,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let schema = ExternalVariableSet::from_config(&config.externals);
    let reporter = Reporter::new(config.output.color, options.skip_ok);

    if options.list_externals {
        reporter
            .write_externals(out, &schema)
            .context("Failed to write external variables")?;
        return Ok(Outcome::Listed);
    }

    let tester = RuleTester::new(Arc::new(YaraEngine::new()), &config.harness, schema)?;
    let results = tester.run(options.file.as_deref())?;
    let summary = reporter
        .write_results(out, &results)
        .context("Failed to write report")?;

    info!(
        total = summary.total_files,
        failed = summary.failed_files,
        "Run complete"
    );
    Ok(Outcome::Tested(summary))
}

/// Full invocation: configuration, logging, run
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> anyhow::Result<Outcome> {
    let loader = config_loader(options);
    let config = load_with(&loader, options)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    if let Some(path) = loader.source_path() {
        log_config_loaded(&path);
    }
    execute(options, &config, out)
}
