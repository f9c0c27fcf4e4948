//! Configuration file loading and resolution into generator settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;

/// Built-in output directory.
const DEFAULT_OUTPUT_DIR: &str = "assets/cards";
/// Built-in placeholder dimensions.
const DEFAULT_WIDTH: u32 = 80;
/// Built-in placeholder height.
const DEFAULT_HEIGHT: u32 = 120;

/// Top-level configuration file contents.
///
/// Every field is optional; missing fields fall back to the built-in
/// defaults when resolved into a [`GeneratorConfig`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output directory for generated files.
    pub output_dir: Option<String>,
    /// Placeholder width in pixels.
    pub width: Option<u32>,
    /// Placeholder height in pixels.
    pub height: Option<u32>,
    /// Rank labels (filename prefix).
    pub ranks: Option<Vec<String>>,
    /// Suit labels (filename suffix).
    pub suits: Option<Vec<String>>,
}

/// Fully resolved settings passed into the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory that receives the generated files.
    pub output_dir: PathBuf,
    /// Placeholder width in pixels.
    pub width: u32,
    /// Placeholder height in pixels.
    pub height: u32,
    /// Rank labels, in output order.
    pub ranks: Vec<String>,
    /// Suit labels, in output order.
    pub suits: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ranks: vec!["Valet".into(), "Dame".into(), "Roi".into()],
            suits: vec!["Pique".into(), "Coeur".into(), "Trefle".into(), "Carreau".into()],
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Resolve CLI flags over file values over built-in defaults.
    #[must_use]
    pub fn resolve(self, cli: &Cli) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            output_dir: cli
                .output_dir
                .clone()
                .or(self.output_dir)
                .map_or(defaults.output_dir, PathBuf::from),
            width: cli.width.or(self.width).unwrap_or(defaults.width),
            height: cli.height.or(self.height).unwrap_or(defaults.height),
            ranks: self.ranks.unwrap_or(defaults.ranks),
            suits: self.suits.unwrap_or(defaults.suits),
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CARDGEN_CONFIG` environment variable
/// 3. `~/.config/cardgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("CARDGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/cardgen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/cardgen/config.toml")
    } else {
        PathBuf::from("cardgen.toml")
    }
}
