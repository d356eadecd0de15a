//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the stock colors of a fresh session.

use crate::models::RgbColor;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Palettesmith";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "palettesmith";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "palettesmith";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PALETTESMITH_CONFIG_DIR";

/// Seed color of a fresh session (#d5d86e).
pub const DEFAULT_SEED_COLOR: RgbColor = RgbColor::new(0xd5, 0xd8, 0x6e);

/// Secondary color used in manual mode when none is given (#10b981).
pub const DEFAULT_SECONDARY_COLOR: RgbColor = RgbColor::new(0x10, 0xb9, 0x81);

/// Tertiary color used in manual mode when none is given (#f59e0b).
pub const DEFAULT_TERTIARY_COLOR: RgbColor = RgbColor::new(0xf5, 0x9e, 0x0b);

/// Title used for exports when none is given.
pub const DEFAULT_PALETTE_TITLE: &str = "Lime Harmony";
