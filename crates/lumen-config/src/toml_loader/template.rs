//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Lumen Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
# Built-in: default-light, default-dark. Or a path to a YAML theme file.
name = "default-light"

[report]
# format = "text"        # text, json
# show_passing = false

[logging]
# level = "info"         # trace, debug, info, warn, error

# Replace the built-in pair table by listing pairs here.
# Token names are custom-property names, with or without the leading "--".
#
# [[pairs]]
# name = "Body text"
# foreground = "foreground"
# background = "background"
# group = "base"
"##
    .to_string()
}
