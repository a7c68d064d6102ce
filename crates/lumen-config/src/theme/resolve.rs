//! Token resolution with `var()` references.

use super::types::{normalize_token, ThemeTokens};
use lumen_contrast::TokenResolver;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Longest `var()` chain followed before giving up (also breaks cycles).
const MAX_VAR_DEPTH: usize = 8;

/// Regex for `var(--name)` or `var(--name, fallback)`.
static VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^var\(\s*--([A-Za-z0-9_-]+)\s*(?:,\s*(.+?))?\s*\)$").unwrap()
});

impl ThemeTokens {
    /// Resolve a token to a concrete color string, following `var()`
    /// references and their fallbacks.
    pub fn resolve_token(&self, token: &str) -> Option<String> {
        self.resolve_at(normalize_token(token), 0)
    }

    fn resolve_at(&self, token: &str, depth: usize) -> Option<String> {
        if depth > MAX_VAR_DEPTH {
            debug!("giving up on '--{token}': var() chain deeper than {MAX_VAR_DEPTH}");
            return None;
        }
        let raw = self.tokens.get(token)?;
        self.resolve_value(raw.trim(), depth)
    }

    fn resolve_value(&self, value: &str, depth: usize) -> Option<String> {
        let Some(caps) = VAR_RE.captures(value) else {
            return Some(value.to_string());
        };
        self.resolve_at(&caps[1], depth + 1).or_else(|| {
            let fallback = caps.get(2)?.as_str().trim();
            self.resolve_value(fallback, depth + 1)
        })
    }
}

impl TokenResolver for ThemeTokens {
    fn resolve(&self, token: &str) -> Option<String> {
        self.resolve_token(token)
    }
}
