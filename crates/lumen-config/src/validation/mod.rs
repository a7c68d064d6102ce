//! Configuration and theme validation.
//!
//! Each domain has its own submodule; these orchestrators call them and
//! collect every problem into a single `ConfigError`.

mod pairs;
mod tokens;

#[cfg(test)]
mod tests;

use crate::schema::LumenConfig;
use crate::theme::ThemeTokens;
use lumen_common::ConfigError;

/// Validate the config on its own (pair table shape).
pub fn validate_config(config: &LumenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    pairs::validate_pairs(&mut errors, &config.pairs);
    finish(errors)
}

/// Validate the config against the theme it will be audited with.
pub fn validate(config: &LumenConfig, theme: &ThemeTokens) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    pairs::validate_pairs(&mut errors, &config.pairs);
    tokens::validate_theme_values(&mut errors, theme);
    tokens::validate_pair_tokens(&mut errors, &config.pair_table(), theme);
    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
