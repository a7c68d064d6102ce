//! `lumen audit`: evaluate the pair table against a theme.

use super::Outcome;
use crate::report::{write_audit, AuditReport};
use lumen_config::schema::ReportFormat;
use lumen_config::{load_theme, validation, LumenConfig};
use lumen_contrast::{evaluate_pairs, ContrastIssue, Rating};
use std::io::Write;
use tracing::{info, warn};

pub(super) struct AuditOptions {
    pub theme: String,
    pub show_passing: bool,
    pub format: ReportFormat,
}

pub(super) fn run(
    config: &LumenConfig,
    options: &AuditOptions,
    out: &mut dyn Write,
) -> lumen_common::Result<Outcome> {
    let theme = load_theme(&options.theme)?;
    if let Err(e) = validation::validate(config, &theme) {
        warn!("{e}");
    }

    let pairs = config.pair_table();
    let evaluations = evaluate_pairs(&pairs, &theme);
    let issues: Vec<ContrastIssue> = evaluations
        .iter()
        .filter(|eval| eval.rating == Rating::Fail)
        .cloned()
        .map(ContrastIssue::from)
        .collect();
    info!(
        "audited {} of {} pairs against '{}': {} failing",
        evaluations.len(),
        pairs.len(),
        options.theme,
        issues.len()
    );

    let report = AuditReport {
        theme: theme.name.clone().unwrap_or_else(|| options.theme.clone()),
        evaluated: evaluations.len(),
        skipped: pairs.len() - evaluations.len(),
        pairs: options.show_passing.then_some(evaluations),
        issues,
    };
    write_audit(out, &report, options.format)?;

    Ok(if report.issues.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Fail
    })
}
