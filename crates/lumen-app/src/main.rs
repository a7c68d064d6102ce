mod cli;
mod commands;
mod report;

#[cfg(test)]
mod log_capture;

use commands::Outcome;
use lumen_common::ConfigError;
use lumen_config::LumenConfig;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "lumen=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` plus one extra directive. An unparseable directive falls back to `info`.
fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("warning: ignoring log directive '{directive}': {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

/// Install the stderr subscriber. The returned handle swaps the filter
/// once the config's `logging.level` is known.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Load the config named by `--config`, or the platform default.
///
/// A path given on the command line must load. Only the default path
/// falls back to built-in defaults when it cannot be read or parsed.
fn load_config(path: Option<&Path>) -> Result<LumenConfig, ConfigError> {
    match lumen_config::load_config_from(path) {
        Ok(config) => Ok(config),
        Err(e) if path.is_none() => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Ok(LumenConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    let filter = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE));

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    // --log-level wins over the config file
    if args.log_level.is_none() {
        if let Err(e) = filter.reload(env_filter(config.logging.level.directive())) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }
    tracing::debug!("Config loaded (theme: {})", config.theme.name);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::run(&args.command, &config, &mut out) {
        Ok(Outcome::Pass) => ExitCode::SUCCESS,
        Ok(Outcome::Fail) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
