//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Contrast and accessibility report for every foreground/background pair of
/// an OKLCH palette.
#[derive(Debug, Parser)]
#[command(name = "legible", version, about, long_about = None)]
pub struct CliConfig {
    /// Palette JSON file. Without one, the default Dark Blue on Light Gray
    /// pair is analyzed.
    #[arg(env = "LEGIBLE_PALETTE")]
    pub palette: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printed output.
    #[arg(
        long,
        env = "LEGIBLE_COMPACT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub compact: bool,

    /// Increase log verbosity on stderr (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliConfig {
    /// Default level when `RUST_LOG` is unset.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = CliConfig::try_parse_from(["legible"]).unwrap();
        assert!(!config.compact);
        assert_eq!(config.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_palette_path_and_flags() {
        let config =
            CliConfig::try_parse_from(["legible", "colors.json", "--compact", "-vv"]).unwrap();
        assert_eq!(config.palette, Some(PathBuf::from("colors.json")));
        assert!(config.compact);
        assert_eq!(config.log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliConfig::try_parse_from(["legible", "--frobnicate"]).is_err());
    }
}
