//! Lumen configuration system.
//!
//! Provides TOML-based configuration, YAML design-token themes with
//! `var()` resolution, and validation. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lumen_config::{load_config, load_theme};
//! use lumen_contrast::evaluate_all_pairs;
//!
//! let config = load_config().expect("failed to load config");
//! let theme = load_theme(&config.theme.name).expect("failed to load theme");
//! let issues = evaluate_all_pairs(&config.pair_table(), &theme);
//! println!("{} failing pairs", issues.len());
//! ```

pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::LumenConfig;
pub use theme::{load_theme, load_theme_from_path, ThemeTokens, BUILT_IN_THEMES};

use lumen_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<LumenConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path, or the platform default when `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<LumenConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}
