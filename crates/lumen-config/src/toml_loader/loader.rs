//! Reading `lumen.toml`: either a path named with `--config` or the
//! per-user default file.

use crate::schema::LumenConfig;
use crate::validation;
use lumen_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Read and parse the config at `path`.
///
/// A missing file is `FileNotFound`; it is never created here. Problems in
/// the `[[pairs]]` table (blank or repeated names, blank tokens) are logged
/// at `warn` and do not fail the load, since the auditor skips such pairs.
pub fn load_from_path(path: &Path) -> Result<LumenConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: LumenConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("{} is not valid TOML: {e}", path.display()))
    })?;

    if let Err(e) = validation::validate_config(&config) {
        warn!("config validation warning: {e}");
    }

    info!(
        "loaded config from {} (theme '{}', {} custom pairs)",
        path.display(),
        config.theme.name,
        config.pairs.len()
    );
    Ok(config)
}

/// Load the per-user config, writing the commented template on first run.
///
/// A fresh template parses to `LumenConfig::default()`, so the first run
/// audits `default-light` with the built-in pair table.
pub fn load_default() -> Result<LumenConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config at {}, writing template", path.display());
        create_default_config(&path)?;
        return Ok(LumenConfig::default());
    }

    load_from_path(&path)
}
