//! Shared CLI plumbing: error type, exit codes and the palette flags used by
//! the palette-producing commands.

use clap::Args;
use serde::Serialize;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::models::{ColorError, RgbColor};
use crate::services::palette::PaletteRequest;
use crate::theory::{HarmonyMode, RampStrategy};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input or a failed check
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input or failed validation
    Validation,
    /// I/O or serialization failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a user-supplied color, accepting 3- or 6-digit hex with or
/// without `#`.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    Ok(RgbColor::from_hex_lenient(input)?)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Palette generation flags shared by `generate`, `export`, `save` and `share link`.
#[derive(Debug, Clone, Default, Args)]
pub struct PaletteArgs {
    /// Seed color (e.g., "#d5d86e"); defaults to the configured seed
    #[arg(value_name = "SEED", conflicts_with = "import")]
    pub seed: Option<String>,

    /// Harmony mode used to derive the companion colors
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<HarmonyMode>,

    /// Pick companion colors manually instead of deriving them
    #[arg(long, conflicts_with = "mode")]
    pub manual: bool,

    /// Manual secondary color (implies --manual)
    #[arg(long, value_name = "HEX", conflicts_with = "mode")]
    pub secondary: Option<String>,

    /// Manual tertiary color (implies --manual)
    #[arg(long, value_name = "HEX", conflicts_with = "mode")]
    pub tertiary: Option<String>,

    /// Skip the secondary ramp
    #[arg(long)]
    pub no_secondary: bool,

    /// Skip the tertiary ramp
    #[arg(long)]
    pub no_tertiary: bool,

    /// Ramp algorithm (lightness or brightness)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<RampStrategy>,

    /// Comma-separated colors to import (seed first, then companions)
    #[arg(
        long,
        value_name = "LIST",
        conflicts_with_all = ["mode", "manual", "secondary", "tertiary"]
    )]
    pub import: Option<String>,
}

impl PaletteArgs {
    /// Resolves the flags against configured defaults into a request.
    pub fn to_request(&self, defaults: &GeneratorConfig) -> CliResult<PaletteRequest> {
        let mut request = if let Some(list) = &self.import {
            PaletteRequest::from_import(list)?
        } else {
            let seed = match &self.seed {
                Some(seed) => parse_color(seed)?,
                None => defaults
                    .seed()
                    .map_err(|e| CliError::validation(format!("{e:#}")))?,
            };
            let mut request = defaults.request(seed);

            if let Some(mode) = self.mode {
                request.harmony = Some(mode);
            }
            if self.manual || self.secondary.is_some() || self.tertiary.is_some() {
                request.harmony = None;
            }
            request.secondary = self.secondary.as_deref().map(parse_color).transpose()?;
            request.tertiary = self.tertiary.as_deref().map(parse_color).transpose()?;
            request
        };

        if let Some(strategy) = self.strategy {
            request.strategy = strategy;
        }
        if self.no_secondary {
            request.include_secondary = false;
        }
        if self.no_tertiary {
            request.include_tertiary = false;
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("disk").exit_code().code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_color_error_is_validation() {
        let err: CliError = RgbColor::from_hex("nope").unwrap_err().into();
        assert_eq!(err.kind, CliErrorKind::Validation);
        assert!(err.message.contains("nope"));
    }

    #[test]
    fn test_request_uses_configured_defaults() {
        let defaults = GeneratorConfig {
            harmony_mode: HarmonyMode::Triadic,
            ..GeneratorConfig::default()
        };
        let request = PaletteArgs::default().to_request(&defaults).unwrap();
        assert_eq!(request.seed, RgbColor::new(0xd5, 0xd8, 0x6e));
        assert_eq!(request.harmony, Some(HarmonyMode::Triadic));
    }

    #[test]
    fn test_manual_colors_switch_off_harmony() {
        let args = PaletteArgs {
            seed: Some("#336699".to_string()),
            secondary: Some("f00".to_string()),
            no_tertiary: true,
            ..PaletteArgs::default()
        };
        let request = args.to_request(&GeneratorConfig::default()).unwrap();
        assert_eq!(request.harmony, None);
        assert_eq!(request.secondary, Some(RgbColor::new(255, 0, 0)));
        assert!(!request.include_tertiary);
    }

    #[test]
    fn test_import_list() {
        let args = PaletteArgs {
            import: Some("d5d86e,10b981".to_string()),
            strategy: Some(RampStrategy::Brightness),
            ..PaletteArgs::default()
        };
        let request = args.to_request(&GeneratorConfig::default()).unwrap();
        assert_eq!(request.harmony, None);
        assert!(!request.include_tertiary);
        assert_eq!(request.strategy, RampStrategy::Brightness);
    }

    #[test]
    fn test_invalid_seed() {
        let args = PaletteArgs {
            seed: Some("#12345".to_string()),
            ..PaletteArgs::default()
        };
        let err = args.to_request(&GeneratorConfig::default()).unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Validation);
    }
}
