use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use absalom_render::HtmlStyle;

/// Top-level configuration for the absalom binary.
///
/// Every field has a default, so an empty file (or no file at all)
/// yields the stock rendering.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbsalomConfig {
    /// Suffix appended to the year in the year-view title and heading.
    #[serde(default = "default_title_suffix")]
    pub title_suffix: String,

    /// HTML rendering settings.
    #[serde(default)]
    pub html: HtmlToml,
}

impl Default for AbsalomConfig {
    fn default() -> Self {
        Self {
            title_suffix: default_title_suffix(),
            html: HtmlToml::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlToml {
    #[serde(default = "default_cell_width")]
    pub cell_width: u32,
    #[serde(default = "default_cell_height")]
    pub cell_height: u32,
}

impl Default for HtmlToml {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

fn default_title_suffix() -> String {
    "AR".to_string()
}
fn default_cell_width() -> u32 {
    100
}
fn default_cell_height() -> u32 {
    100
}

/// Loads the configuration from `path`, or returns the defaults when no
/// path was given.
pub fn load(path: Option<&Path>) -> Result<AbsalomConfig> {
    let Some(path) = path else {
        return Ok(AbsalomConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Builds an [`HtmlStyle`] from the TOML configuration.
pub fn build_style(config: &AbsalomConfig) -> HtmlStyle {
    HtmlStyle::default()
        .with_cell_width(config.html.cell_width)
        .with_cell_height(config.html.cell_height)
        .with_title_suffix(&config.title_suffix)
}
