//! Command-line interface.

use crate::config::{AppConfig, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "airdiag")]
#[command(about = "Annotate airport diagram changes between AIRAC cycles", long_about = None)]
pub struct Cli {
    /// JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the changes of a saved comparison onto the old and new diagrams.
    Compare(CompareArgs),
    /// Print a saved airport list.
    Airports {
        /// `/api/airports` response.
        file: PathBuf,
    },
    /// Print a saved cycle pair.
    Cycles {
        /// `/api/cycles` response.
        file: PathBuf,
    },
    /// Print a saved historical lookup.
    History {
        /// `/api/historical/<airport>` response.
        file: PathBuf,
        /// Airport the lookup was run for.
        #[arg(long, default_value = "")]
        airport: String,
    },
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// `/api/compare/<airport>` response.
    pub comparison: PathBuf,

    /// Directory of pre-rasterized pages.
    #[arg(long)]
    pub pages: Option<PathBuf>,

    /// Output directory.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Resolution the page images were rasterized at.
    #[arg(long)]
    pub dpi: Option<f64>,

    /// Fit pages to this width in pixels.
    #[arg(long)]
    pub width: Option<f64>,
}

impl CompareArgs {
    /// Apply flags on top of file/default configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(pages) = &self.pages {
            config.pages_dir = pages.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(dpi) = self.dpi {
            config.source_dpi = dpi;
        }
        if let Some(width) = self.width {
            config.display_width = Some(width);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compare_flags_override_config() {
        let cli = Cli::parse_from([
            "airdiag", "compare", "syr.json", "--pages", "pages", "--format", "png", "--width", "800",
        ]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        let config = args.apply(AppConfig::default());
        assert_eq!(config.pages_dir, PathBuf::from("pages"));
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.display_width, Some(800.0));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_history_command() {
        let cli = Cli::parse_from(["airdiag", "history", "hist.json", "--airport", "SYR"]);
        assert!(matches!(cli.command, Command::History { ref airport, .. } if airport == "SYR"));
    }
}
