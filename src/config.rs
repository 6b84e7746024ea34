//! Portfolio configuration module.
//!
//! Handles loading and validating `showcase.toml`. Stock defaults are
//! overridden by an optional user file in the config directory (`--config-dir`,
//! the current directory by default).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! works_path = "data/works.json"  # Curated works file used when --works is absent,
//!                                 # relative to the directory holding this file
//!
//! [output]
//! format = "markdown"       # Default `generate` format: markdown | html | json
//!
//! [display]
//! search_preview = 100      # Description characters shown per search hit
//! featured_preview = 120    # Description characters shown per featured work
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"    # Meta lines, counts, tags
//! border = "#e0e0e0"
//! accent = "#b8860b"        # Featured highlight
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#e0b040"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [output]
//! format = "html"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Color values may not
//! contain `<`, `>`, `{`, `}` or `;`, since they are written into the page's
//! inline stylesheet.

use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "showcase.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Portfolio configuration loaded from `showcase.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Curated works file read when no source is given on the command line.
    /// Relative paths are taken from the config directory; see [`Self::works_file`].
    pub works_path: String,
    pub output: OutputConfig,
    pub display: DisplayConfig,
    /// HTML color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            works_path: "data/works.json".to_string(),
            output: OutputConfig::default(),
            display: DisplayConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.works_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "works_path must not be empty".into(),
            ));
        }
        if self.display.search_preview == 0 || self.display.featured_preview == 0 {
            return Err(ConfigError::Validation(
                "display preview lengths must be non-zero".into(),
            ));
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            scheme.validate(mode)?;
        }
        Ok(())
    }

    /// The curated works file, with a relative `works_path` taken from the
    /// directory holding `showcase.toml`.
    pub fn works_file(&self, config_dir: &Path) -> PathBuf {
        let path = Path::new(&self.works_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used by `generate` when `--format` is not given.
    pub format: OutputFormat,
}

/// How much description text the CLI listings show.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub search_preview: usize,
    pub featured_preview: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            search_preview: 100,
            featured_preview: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Meta lines, counts and tags.
    pub text_muted: String,
    pub border: String,
    /// Highlight for featured works.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#b8860b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#e0b040".to_string(),
        }
    }
}

/// Characters that could end a CSS declaration or the inline `<style>` block.
const FORBIDDEN_COLOR_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

impl ColorScheme {
    /// Reject values that would break out of their CSS declaration.
    fn validate(&self, mode: &str) -> Result<(), ConfigError> {
        let fields = [
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("accent", &self.accent),
        ];
        for (name, value) in fields {
            if value.contains(FORBIDDEN_COLOR_CHARS) {
                return Err(ConfigError::Validation(format!(
                    "colors.{mode}.{name} contains a forbidden character: {value:?}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `showcase.toml` in the given directory.
///
/// A missing file yields the stock defaults. A present file only needs the
/// keys it overrides; everything else falls back through `#[serde(default)]`.
/// Unknown keys are rejected and the result is validated.
pub fn load_config(dir: &Path) -> Result<PortfolioConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(PortfolioConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: PortfolioConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `showcase.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Portfolio Configuration
# ================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Curated works file read when --works / --registry are not given.
# Relative paths are resolved against the directory holding this file.
works_path = "data/works.json"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Format used by `generate` when --format is not given: markdown, html or json.
format = "markdown"

# ---------------------------------------------------------------------------
# Terminal listings
# ---------------------------------------------------------------------------
[display]
# Description characters shown per hit by `search`.
search_preview = 100

# Description characters shown per work by `featured`.
featured_preview = 120

# ---------------------------------------------------------------------------
# HTML colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Meta lines, counts, tags
border = "#e0e0e0"
accent = "#b8860b"        # Featured highlight

# ---------------------------------------------------------------------------
# HTML colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#e0b040"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}
