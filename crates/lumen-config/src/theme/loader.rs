//! Theme file resolution and loading.
//!
//! Resolves theme names to built-in themes or filesystem paths and parses
//! YAML theme files into [`ThemeTokens`].

use super::builtin::built_in_theme;
use super::types::{normalize_token, ThemeTokens};
use lumen_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolve the filesystem path for a theme by name.
///
/// If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`), it is used directly. Otherwise `themes/<name>.yaml` is
/// searched in the working directory, then in the lumen config directory.
fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let local_path = PathBuf::from("themes").join(format!("{name}.yaml"));
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_theme = config_dir
            .join("lumen")
            .join("themes")
            .join(format!("{name}.yaml"));
        if config_theme.exists() {
            return Ok(config_theme);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

/// Load a theme by name: built-in themes first, then theme files.
pub fn load_theme(name: &str) -> Result<ThemeTokens, ConfigError> {
    if let Some(theme) = built_in_theme(name) {
        return Ok(theme);
    }

    let path = resolve_theme_path(name)?;
    load_theme_from_path(&path)
}

/// Load a theme from a specific filesystem path.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeTokens, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let mut theme: ThemeTokens = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse theme YAML {}: {e}",
            path.display()
        ))
    })?;

    // Authors may write `--primary:` keys straight from a stylesheet
    theme.tokens = std::mem::take(&mut theme.tokens)
        .into_iter()
        .map(|(k, v)| (normalize_token(&k).to_string(), v))
        .collect();

    if theme.name.is_none() {
        theme.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    info!(
        "loaded theme '{}' ({} tokens) from {}",
        theme.name.as_deref().unwrap_or_default(),
        theme.len(),
        path.display()
    );
    Ok(theme)
}
