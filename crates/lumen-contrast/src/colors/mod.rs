//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `rgb(r, g, b)`, `hsl(h, s%, l%)` and the bare
//! `H S% L%` triple design systems store in CSS custom properties.

mod hsl;
mod parse;


use lumen_common::Color;

pub use hsl::hsl_to_rgb;
use parse::{parse_bare_hsl, parse_hex, parse_hsl, parse_rgb};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB` / `#RRGGBB` (e.g. `#0f172a`), case-insensitive
/// - `rgb(r, g, b)` with integer channels (e.g. `rgb(15, 23, 42)`)
/// - `hsl(h, s%, l%)` (e.g. `hsl(222.2, 84%, 4.9%)` or `hsl(222.2 84% 4.9%)`)
/// - bare `H S% L%` (e.g. `222.2 84% 4.9%`)
///
/// Returns `None` for anything else; malformed input is never an error.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    parse_hex(s)
        .or_else(|| parse_rgb(s))
        .or_else(|| parse_hsl(s))
        .or_else(|| parse_bare_hsl(s))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_some()
}
