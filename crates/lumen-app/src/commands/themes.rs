//! `lumen themes`: list built-in themes.

use super::Outcome;
use lumen_config::theme::built_in_theme;
use lumen_config::BUILT_IN_THEMES;
use std::io::Write;

pub(super) fn run(out: &mut dyn Write) -> lumen_common::Result<Outcome> {
    for name in BUILT_IN_THEMES {
        let Some(theme) = built_in_theme(name) else {
            continue;
        };
        writeln!(
            out,
            "{name:<16} {:>3} tokens  {}",
            theme.len(),
            theme.description.as_deref().unwrap_or("")
        )?;
    }
    Ok(Outcome::Pass)
}
