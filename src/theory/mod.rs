//! Color theory engine.
//!
//! Pure, stateless functions converting between color encodings and deriving
//! harmonious palettes and tonal ramps from a single seed color. Nothing here
//! performs I/O or holds shared state, so every function is safe to call from
//! any thread.
//!
//! The free functions in this module mirror the methods on
//! [`RgbColor`] and [`HslColor`] for callers that prefer a flat API.

pub mod contrast;
pub mod harmony;
pub mod ramp;

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ColorError, HslColor, RgbColor};

pub use contrast::{contrast_ratio, relative_luminance, WcagLevel};
pub use harmony::{derive_harmony, Harmony, HarmonyMode};
pub use ramp::{generate_shade_ramp, ramp_with_strategy, RampStrategy};

/// `#RGB` or `#RRGGBB`, leading `#` required.
static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex color pattern is valid")
});

/// Parses a 6-digit hex color, with or without a leading `#`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for any input not matching
/// `^#?[0-9A-Fa-f]{6}$`.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor, ColorError> {
    RgbColor::from_hex(hex)
}

/// Formats integer channels as `#rrggbb`, clamping each to 0-255.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    RgbColor::from_channels_clamped(r, g, b).to_hex()
}

/// Converts RGB channels to HSL.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HslColor {
    RgbColor::new(r, g, b).to_hsl()
}

/// Converts HSL components to RGB channels.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    RgbColor::from_hsl(h, s, l)
}

/// True iff the BT.601 brightness of `color` is above 128.
#[must_use]
pub fn is_light_color(color: RgbColor) -> bool {
    color.is_light()
}

/// Black for light colors, white otherwise.
#[must_use]
pub fn contrast_color(color: RgbColor) -> RgbColor {
    color.contrast_color()
}

/// True iff `s` is `#` followed by exactly 3 or 6 hex digits.
///
/// # Examples
///
/// ```
/// use palettesmith::theory::validate_hex_color;
///
/// assert!(validate_hex_color("#abc"));
/// assert!(validate_hex_color("#abcdef"));
/// assert!(!validate_hex_color("abcdef"));
/// assert!(!validate_hex_color("#abcd"));
/// ```
#[must_use]
pub fn validate_hex_color(s: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(s)
}
