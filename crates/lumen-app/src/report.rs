//! Text and JSON rendering of check and audit results.

use lumen_common::{Color, LumenError};
use lumen_config::schema::ReportFormat;
use lumen_contrast::{ContrastIssue, ContrastResult, PairEvaluation, Rating};
use serde::Serialize;
use std::io::Write;

/// Result of `lumen check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub rating: Rating,
}

impl CheckReport {
    pub fn new(fg: Color, bg: Color, result: ContrastResult) -> Self {
        Self {
            foreground: fg.to_hex(),
            background: bg.to_hex(),
            ratio: result.ratio,
            rating: result.rating,
        }
    }
}

/// Result of `lumen audit`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub theme: String,
    pub evaluated: usize,
    pub skipped: usize,
    pub issues: Vec<ContrastIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<PairEvaluation>>,
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), LumenError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| LumenError::Other(format!("failed to serialize report: {e}")))?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn write_check(
    out: &mut dyn Write,
    report: &CheckReport,
    format: ReportFormat,
) -> Result<(), LumenError> {
    match format {
        ReportFormat::Json => write_json(out, report),
        ReportFormat::Text => {
            writeln!(out, "{} on {}", report.foreground, report.background)?;
            writeln!(out, "contrast {:.2}:1  {}", report.ratio, report.rating)?;
            Ok(())
        }
    }
}

pub fn write_audit(
    out: &mut dyn Write,
    report: &AuditReport,
    format: ReportFormat,
) -> Result<(), LumenError> {
    if format == ReportFormat::Json {
        return write_json(out, report);
    }

    writeln!(
        out,
        "Theme: {} ({} pairs evaluated, {} skipped, {} failing)",
        report.theme,
        report.evaluated,
        report.skipped,
        report.issues.len()
    )?;

    if let Some(pairs) = &report.pairs {
        for eval in pairs {
            writeln!(
                out,
                "  {:<8} {:<28} {:>6.2}:1  ({} on {})",
                eval.rating.as_str(),
                eval.name,
                eval.ratio,
                eval.foreground,
                eval.background
            )?;
        }
        return Ok(());
    }

    for issue in &report.issues {
        writeln!(
            out,
            "  FAIL     {:<28} {:>6.2}:1  needs {}:1  ({} on {})",
            issue.name, issue.ratio, issue.required_ratio, issue.foreground, issue.background
        )?;
    }
    Ok(())
}
