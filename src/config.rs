//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_SEED_COLOR};
use crate::export::{ColorFormat, ExportTarget};
use crate::models::RgbColor;
use crate::services::palette::PaletteRequest;
use crate::theory::{HarmonyMode, RampStrategy};

/// Default palette generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Harmony mode used when none is given on the command line
    pub harmony_mode: HarmonyMode,
    /// Ramp algorithm
    pub ramp_strategy: RampStrategy,
    /// Generate the secondary ramp
    pub include_secondary: bool,
    /// Generate the tertiary ramp
    pub include_tertiary: bool,
    /// Seed color used when none is given (e.g., "#d5d86e")
    pub default_seed: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            harmony_mode: HarmonyMode::default(),
            ramp_strategy: RampStrategy::default(),
            include_secondary: true,
            include_tertiary: true,
            default_seed: DEFAULT_SEED_COLOR.to_hex(),
        }
    }
}

impl GeneratorConfig {
    /// Parses the configured default seed.
    pub fn seed(&self) -> Result<RgbColor> {
        RgbColor::from_hex_lenient(&self.default_seed)
            .with_context(|| format!("Invalid default seed color '{}'", self.default_seed))
    }

    /// Builds a generation request for `seed` from these defaults.
    #[must_use]
    pub fn request(&self, seed: RgbColor) -> PaletteRequest {
        PaletteRequest {
            harmony: Some(self.harmony_mode),
            include_secondary: self.include_secondary,
            include_tertiary: self.include_tertiary,
            strategy: self.ramp_strategy,
            ..PaletteRequest::new(seed)
        }
    }
}

/// Default export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output flavor
    pub target: ExportTarget,
    /// Color notation inside exported code
    pub format: ColorFormat,
    /// Directory exports are written to when no explicit path is given
    pub output_dir: Option<PathBuf>,
}

/// Local web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL of the local server, used as the origin of share links.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_addr())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/palettesmith/config.toml`
/// - macOS: `~/Library/Application Support/palettesmith/config.toml`
/// - Windows: `%APPDATA%\palettesmith\config.toml`
///
/// Setting `PALETTESMITH_CONFIG_DIR` replaces the platform directory.
///
/// # Validation
///
/// - `default_seed` must be a valid hex color
/// - `port` must be non-zero
/// - `output_dir` parent must exist when set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette generation defaults
    pub generator: GeneratorConfig,
    /// Export defaults
    pub export: ExportConfig,
    /// Web server settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `PALETTESMITH_CONFIG_DIR` when set, otherwise the platform
    /// config directory joined with `palettesmith`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config.validate()?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!(
                    "Failed to create config directory: {}",
                    config_dir.display()
                )
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!(
                "Failed to write temp config file: {}",
                temp_path.display()
            )
        })?;

        fs::rename(&temp_path, config_path).with_context(|| {
            format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            )
        })?;

        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.generator.seed()?;

        if self.server.port == 0 {
            anyhow::bail!("Server port must be non-zero");
        }

        if let Some(output_dir) = &self.export.output_dir {
            if let Some(parent) = output_dir.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.exists() {
                    anyhow::bail!(
                        "Export output directory parent does not exist: {}",
                        parent.display()
                    );
                }
            }
        }

        Ok(())
    }
}
