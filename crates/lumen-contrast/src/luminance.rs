//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Both functions are pure and total over [`Color`]; the ratio is always in
//! `[1.0, 21.0]` regardless of argument order.

use crate::colors::parse_color;
use crate::rating::{classify_rating, Rating};
use lumen_common::Color;
use serde::{Deserialize, Serialize};

/// Channel value at or below which the sRGB transfer curve is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Ratio and rating for one foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub rating: Rating,
}

fn channel_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color.
///
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B over the gamma-expanded
/// channels. Returns a value in [0.0, 1.0].
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// Compute the contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
pub fn contrast_ratio(fg: Color, bg: Color) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute ratio and rating for a pair of colors.
pub fn evaluate(fg: Color, bg: Color) -> ContrastResult {
    let ratio = contrast_ratio(fg, bg);
    ContrastResult {
        ratio,
        rating: classify_rating(ratio),
    }
}

/// Parse both color strings and evaluate them. `None` if either is unparseable.
pub fn parse_and_evaluate(fg: &str, bg: &str) -> Option<ContrastResult> {
    Some(evaluate(parse_color(fg)?, parse_color(bg)?))
}
