//! Internal color parsing helpers.
//!
//! Each helper recognizes exactly one notation and returns `None` for
//! anything else, so callers can chain them with `or_else`.

use super::hsl::hsl_to_rgb;
use lumen_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// A CSS number: optional sign, integer or decimal part.
const NUM: &str = r"[-+]?(?:\d+(?:\.\d*)?|\.\d+)";

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for `rgb(r, g, b)` with integer channels.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Regex for `hsl(h, s%, l%)` or `hsl(h s% l%)`. Separators may not be mixed.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^hsl\(\s*(?:({NUM})\s*,\s*({NUM})%\s*,\s*({NUM})%|({NUM})\s+({NUM})%\s+({NUM})%)\s*\)$"
    ))
    .unwrap()
});

/// Regex for the bare `H S% L%` triple stored in CSS custom properties.
pub(crate) static BARE_HSL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^({NUM})\s+({NUM})%\s+({NUM})%$")).unwrap());

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Color::from_hex(hex),
        _ => None,
    }
}

/// Parse an `rgb(r, g, b)` color string. Channels above 255 clamp to 255.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let channel = |i: usize| -> Option<u8> {
        let v: u16 = caps[i].parse().ok()?;
        Some(v.min(255) as u8)
    };
    Some(Color::from_rgb(channel(1)?, channel(2)?, channel(3)?))
}

/// Parse an `hsl(h, s%, l%)` color string.
pub(super) fn parse_hsl(s: &str) -> Option<Color> {
    hsl_from_captures(&HSL_RE, s)
}

/// Parse a bare `H S% L%` triple.
pub(super) fn parse_bare_hsl(s: &str) -> Option<Color> {
    hsl_from_captures(&BARE_HSL_RE, s)
}

/// Reads the three groups that participated in the match, whichever
/// alternative of `re` they came from.
fn hsl_from_captures(re: &Regex, s: &str) -> Option<Color> {
    let caps = re.captures(s)?;
    let mut parts = caps.iter().skip(1).flatten();
    let mut next = || -> Option<f64> { parts.next()?.as_str().parse().ok() };
    let (h, sat, light) = (next()?, next()?, next()?);
    Some(hsl_to_rgb(h, sat, light))
}
