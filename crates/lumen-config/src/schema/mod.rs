//! Configuration schema types for Lumen.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod report;
mod system;
mod theme;

pub use report::*;
pub use system::*;
pub use theme::*;

use lumen_contrast::{default_pairs, ContrastPair};
use serde::{Deserialize, Serialize};

/// Root configuration for Lumen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    pub theme: ThemeConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
    /// Pair table to audit. Empty means the built-in table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<ContrastPair>,
}

impl LumenConfig {
    /// The pairs to audit: the configured table, or the built-in one.
    pub fn pair_table(&self) -> Vec<ContrastPair> {
        if self.pairs.is_empty() {
            default_pairs()
        } else {
            self.pairs.clone()
        }
    }
}
