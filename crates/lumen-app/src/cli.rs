use clap::{Parser, Subcommand, ValueEnum};
use lumen_config::schema::ReportFormat;
use std::path::PathBuf;

/// Lumen: WCAG contrast checks for design-token themes.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `lumen=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Measure the contrast of one foreground/background pair.
    Check {
        /// Foreground color (hex, rgb(), hsl() or bare "H S% L%").
        #[arg(allow_hyphen_values = true)]
        foreground: String,

        /// Background color.
        #[arg(allow_hyphen_values = true)]
        background: String,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Audit the pair table against a theme.
    Audit {
        /// Built-in theme name or path to a theme YAML file.
        #[arg(short, long)]
        theme: Option<String>,

        /// Report passing pairs as well as failures.
        #[arg(long)]
        all: bool,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List built-in themes.
    Themes,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check() {
        let args = Args::try_parse_from(["lumen", "check", "#000", "210 40% 98%"]).unwrap();
        assert_eq!(
            args.command,
            Command::Check {
                foreground: "#000".into(),
                background: "210 40% 98%".into(),
                format: None,
            }
        );
    }

    #[test]
    fn parse_check_negative_hue() {
        let args = Args::try_parse_from(["lumen", "check", "-120 100% 50%", "#fff"]).unwrap();
        assert!(matches!(args.command, Command::Check { ref foreground, .. } if foreground == "-120 100% 50%"));
    }

    #[test]
    fn parse_audit_with_options() {
        let args = Args::try_parse_from([
            "lumen",
            "--config",
            "/tmp/lumen.toml",
            "audit",
            "--theme",
            "default-dark",
            "--all",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/lumen.toml")));
        assert_eq!(
            args.command,
            Command::Audit {
                theme: Some("default-dark".into()),
                all: true,
                format: Some(FormatArg::Json),
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["lumen", "themes", "--log-level", "lumen=debug"]).unwrap();
        assert_eq!(args.command, Command::Themes);
        assert_eq!(args.log_level.as_deref(), Some("lumen=debug"));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Args::try_parse_from(["lumen"]).is_err());
    }

    #[test]
    fn format_arg_maps_to_report_format() {
        assert_eq!(ReportFormat::from(FormatArg::Json), ReportFormat::Json);
        assert_eq!(ReportFormat::from(FormatArg::Text), ReportFormat::Text);
    }
}
