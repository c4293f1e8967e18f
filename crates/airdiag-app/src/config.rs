//! Application configuration.

use crate::error::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Widest canvas a page may be fitted to, in pixels.
pub const MAX_DISPLAY_WIDTH: f64 = 20_000.0;

/// File type written for each annotated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Settings for the annotate pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding pre-rasterized pages named `<AIRPORT>_<CYCLE>.png`.
    pub pages_dir: PathBuf,
    /// Directory annotated surfaces are written to.
    pub output_dir: PathBuf,
    /// Resolution the page images were rasterized at.
    pub source_dpi: f64,
    /// Width to fit each page to; `None` keeps the image's own width.
    pub display_width: Option<f64>,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            source_dpi: 150.0,
            display_width: Some(1000.0),
            format: OutputFormat::Svg,
        }
    }
}

impl AppConfig {
    /// Load a JSON config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&json)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the page backend cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.source_dpi.is_finite() && self.source_dpi > 0.0) {
            return Err(AppError::Config(format!(
                "source_dpi must be positive, got {}",
                self.source_dpi
            )));
        }
        if let Some(width) = self.display_width {
            if !(width.is_finite() && (1.0..=MAX_DISPLAY_WIDTH).contains(&width)) {
                return Err(AppError::Config(format!(
                    "display_width must be between 1 and {MAX_DISPLAY_WIDTH}, got {width}"
                )));
            }
        }
        Ok(())
    }
}
