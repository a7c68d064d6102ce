//! Subcommand dispatch.

mod audit;
mod check;
mod themes;


use crate::cli::Command;
use lumen_config::LumenConfig;
use std::io::Write;

/// Whether a command found contrast failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

pub fn run(
    command: &Command,
    config: &LumenConfig,
    out: &mut dyn Write,
) -> lumen_common::Result<Outcome> {
    match command {
        Command::Check {
            foreground,
            background,
            format,
        } => {
            let format = format.map(Into::into).unwrap_or(config.report.format);
            check::run(foreground, background, format, out)
        }
        Command::Audit { theme, all, format } => {
            let options = audit::AuditOptions {
                theme: theme.clone().unwrap_or_else(|| config.theme.name.clone()),
                show_passing: *all || config.report.show_passing,
                format: format.map(Into::into).unwrap_or(config.report.format),
            };
            audit::run(config, &options, out)
        }
        Command::Themes => themes::run(out),
    }
}
