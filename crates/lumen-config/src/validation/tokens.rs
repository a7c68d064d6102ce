//! Theme validation: token values and pair references.

use crate::theme::ThemeTokens;
use lumen_contrast::{validate_color, ContrastPair};

/// Every token must resolve (through `var()` chains) to a parseable color.
pub(crate) fn validate_theme_values(errors: &mut Vec<String>, theme: &ThemeTokens) {
    for (token, raw) in &theme.tokens {
        match theme.resolve_token(token) {
            Some(value) if validate_color(&value) => {}
            Some(value) => errors.push(format!("--{token} = '{value}' is not a recognized color")),
            None => errors.push(format!("--{token} = '{raw}' does not resolve")),
        }
    }
}

/// Every token a pair names must exist in the theme.
pub(crate) fn validate_pair_tokens(
    errors: &mut Vec<String>,
    pairs: &[ContrastPair],
    theme: &ThemeTokens,
) {
    for pair in pairs {
        for token in [&pair.foreground, &pair.background] {
            if !theme.contains(token) {
                errors.push(format!("pair '{}' references missing token '{token}'", pair.name));
            }
        }
    }
}
