//! Tests for config and theme validation.

use super::*;
use crate::theme::built_in_theme;
use lumen_contrast::ContrastPair;

#[test]
fn default_config_validates_against_built_in_themes() {
    let config = LumenConfig::default();
    assert!(validate_config(&config).is_ok());
    for name in crate::theme::BUILT_IN_THEMES {
        let theme = built_in_theme(name).unwrap();
        assert!(validate(&config, &theme).is_ok(), "{name} failed validation");
    }
}

#[test]
fn catches_duplicate_pair_names() {
    let config = LumenConfig {
        pairs: vec![
            ContrastPair::new("Card", "card-foreground", "card"),
            ContrastPair::new("Card", "foreground", "card"),
        ],
        ..Default::default()
    };
    let err = validate_config(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate pair name 'Card'"));
}

#[test]
fn catches_empty_fields() {
    let config = LumenConfig {
        pairs: vec![ContrastPair::new(" ", "", "card")],
        ..Default::default()
    };
    let err = validate_config(&config).unwrap_err().to_string();
    assert!(err.contains("pairs[0].name is empty"));
    assert!(err.contains("pairs[0].foreground is empty"));
    assert!(!err.contains("pairs[0].background"));
}

#[test]
fn catches_unrecognized_theme_value() {
    let theme = ThemeTokens::from_entries(
        "t",
        &[("foreground", "#000"), ("background", "transparent")],
    );
    let config = LumenConfig {
        pairs: vec![ContrastPair::new("Body", "foreground", "background")],
        ..Default::default()
    };
    let err = validate(&config, &theme).unwrap_err().to_string();
    assert!(err.contains("--background = 'transparent' is not a recognized color"));
}

#[test]
fn catches_unresolvable_reference() {
    let theme = ThemeTokens::from_entries("t", &[("ring", "var(--nowhere)")]);
    let config = LumenConfig {
        pairs: vec![ContrastPair::new("Ring", "ring", "ring")],
        ..Default::default()
    };
    let err = validate(&config, &theme).unwrap_err().to_string();
    assert!(err.contains("--ring = 'var(--nowhere)' does not resolve"));
}

#[test]
fn catches_missing_pair_tokens() {
    let theme = ThemeTokens::from_entries("t", &[("foreground", "#000")]);
    let config = LumenConfig {
        pairs: vec![ContrastPair::new("Body", "foreground", "--background")],
        ..Default::default()
    };
    let err = validate(&config, &theme).unwrap_err().to_string();
    assert!(err.contains("pair 'Body' references missing token '--background'"));
    assert!(!err.contains("'foreground'"));
}

#[test]
fn collects_all_errors() {
    let theme = ThemeTokens::from_entries("t", &[("a", "nope")]);
    let config = LumenConfig {
        pairs: vec![
            ContrastPair::new("P", "a", "b"),
            ContrastPair::new("P", "a", "c"),
        ],
        ..Default::default()
    };
    let err = validate(&config, &theme).unwrap_err().to_string();
    assert!(err.contains("duplicate pair name"));
    assert!(err.contains("not a recognized color"));
    assert!(err.contains("missing token 'b'"));
    assert!(err.contains("missing token 'c'"));
}
