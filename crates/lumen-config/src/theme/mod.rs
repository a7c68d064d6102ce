//! Theme loading and token resolution.
//!
//! A theme maps design-token names to color strings. Two themes are built
//! in; others are YAML files with a `tokens` map.

mod builtin;
mod loader;
mod resolve;
mod types;


pub use builtin::{built_in_theme, BUILT_IN_THEMES};
pub use loader::{load_theme, load_theme_from_path};
pub use types::ThemeTokens;
