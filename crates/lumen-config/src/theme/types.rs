//! Theme type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A design-token theme: token name -> color string.
///
/// Token names are stored without the leading `--`. Values may be any
/// notation `parse_color` accepts, or a `var(--other, fallback)` reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tokens: BTreeMap<String, String>,
}

impl ThemeTokens {
    pub fn from_entries(name: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            tokens: entries
                .iter()
                .map(|(k, v)| (normalize_token(k).to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Raw, unresolved value of a token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(normalize_token(token)).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(normalize_token(token))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Strip surrounding whitespace and the CSS custom-property `--` prefix.
pub(crate) fn normalize_token(token: &str) -> &str {
    let token = token.trim();
    token.strip_prefix("--").unwrap_or(token)
}
