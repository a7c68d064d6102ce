//! Built-in design-system pair table.

use super::ContrastPair;

/// The token pairs every theme is expected to keep readable.
///
/// Token names are the custom-property names without the leading `--`.
pub fn default_pairs() -> Vec<ContrastPair> {
    vec![
        ContrastPair::new("Body text", "foreground", "background").with_group("base"),
        ContrastPair::new("Muted text", "muted-foreground", "muted").with_group("base"),
        ContrastPair::new("Muted text on background", "muted-foreground", "background")
            .with_group("base"),
        ContrastPair::new("Card", "card-foreground", "card").with_group("surface"),
        ContrastPair::new("Popover", "popover-foreground", "popover").with_group("surface"),
        ContrastPair::new("Primary button", "primary-foreground", "primary").with_group("action"),
        ContrastPair::new("Secondary button", "secondary-foreground", "secondary")
            .with_group("action"),
        ContrastPair::new("Accent", "accent-foreground", "accent").with_group("action"),
        ContrastPair::new("Destructive", "destructive-foreground", "destructive")
            .with_group("feedback"),
    ]
}
