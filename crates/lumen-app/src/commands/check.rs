//! `lumen check`: contrast of a single color pair.

use super::Outcome;
use crate::report::{write_check, CheckReport};
use lumen_common::LumenError;
use lumen_config::schema::ReportFormat;
use lumen_contrast::{evaluate, parse_color, Rating};
use std::io::Write;

pub(super) fn run(
    foreground: &str,
    background: &str,
    format: ReportFormat,
    out: &mut dyn Write,
) -> lumen_common::Result<Outcome> {
    let fg = parse_color(foreground)
        .ok_or_else(|| LumenError::Other(format!("unrecognized color: {foreground}")))?;
    let bg = parse_color(background)
        .ok_or_else(|| LumenError::Other(format!("unrecognized color: {background}")))?;

    let result = evaluate(fg, bg);
    tracing::debug!("{fg} on {bg}: {:.3} ({})", result.ratio, result.rating);

    write_check(out, &CheckReport::new(fg, bg, result), format)?;

    Ok(if result.rating == Rating::Fail {
        Outcome::Fail
    } else {
        Outcome::Pass
    })
}
