//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ColorError;
use super::hsl::HslColor;

/// RGB color value.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parses from hex strings (#RRGGBB) and serializes as `{"r", "g", "b"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white (#ffffff).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from arbitrary integer channels, clamping each
    /// to 0-255.
    #[must_use]
    pub fn from_channels_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Parses an `RgbColor` from a 6-digit hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Whitespace anywhere in the input is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the string is not exactly
    /// six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid(hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid(hex))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parses either the 6-digit form or the 3-digit `#RGB` short form.
    ///
    /// Short form digits are doubled (`#abc` is `#aabbcc`). Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn from_hex_lenient(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            return Self::from_hex(&expanded).map_err(|_| ColorError::invalid(hex));
        }

        Self::from_hex(trimmed).map_err(|_| ColorError::invalid(hex))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgb(r, g, b)` function.
    #[must_use]
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// Hue is in degrees [0, 360), saturation and lightness are percentages
    /// [0, 100]. Achromatic colors report hue and saturation of 0. When two
    /// channels share the maximum, red wins over green and green over blue.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// let hsl = RgbColor::new(255, 0, 0).to_hsl();
    /// assert!((hsl.h - 0.0).abs() < 0.01);
    /// assert!((hsl.s - 100.0).abs() < 0.01);
    /// assert!((hsl.l - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        HslColor::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Creates an `RgbColor` from HSL components.
    ///
    /// Hue is taken modulo 360; saturation and lightness are clamped to
    /// [0, 100]. Channels are rounded to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsl(480.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Perceived brightness using ITU-R BT.601 weights (0.0-255.0).
    #[must_use]
    pub fn brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Returns true if the brightness is above the midpoint (128).
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.brightness() > 128.0
    }

    /// Text color that stays readable on top of this color: black for light
    /// colors, white otherwise.
    #[must_use]
    pub fn contrast_color(&self) -> Self {
        if self.is_light() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Scales every channel by `factor`, rounding and clamping to 0-255.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        let apply = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(apply(self.r), apply(self.g), apply(self.b))
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_lenient(s)
    }
}

impl From<HslColor> for RgbColor {
    fn from(hsl: HslColor) -> Self {
        hsl.to_rgb()
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_rejects_whitespace() {
        assert!(RgbColor::from_hex("  #FFFFFF  ").is_err());
        assert!(RgbColor::from_hex(" #ffffff").is_err());
        assert!(RgbColor::from_hex("ffffff\n").is_err());
        assert!(RgbColor::from_hex("\t#d5d86e").is_err());
        assert!(RgbColor::from_hex("#ff ff ff").is_err());
    }

    #[test]
    fn test_from_hex_lenient_trims() {
        assert_eq!(
            RgbColor::from_hex_lenient("  #FFFFFF  ").unwrap(),
            RgbColor::WHITE
        );
        assert_eq!(
            RgbColor::from_hex_lenient("\tabc\n").unwrap(),
            RgbColor::new(0xaa, 0xbb, 0xcc)
        );
        let err = RgbColor::from_hex_lenient(" #12345g ").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat(" #12345g ".to_string()));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("##ffffff").is_err());
        assert!(RgbColor::from_hex("+1ffff").is_err());
    }

    #[test]
    fn test_from_hex_error_keeps_input() {
        let err = RgbColor::from_hex("#12345g").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("#12345g".to_string()));
    }

    #[test]
    fn test_from_hex_lenient_short_form() {
        assert_eq!(
            RgbColor::from_hex_lenient("#abc").unwrap(),
            RgbColor::new(0xaa, 0xbb, 0xcc)
        );
        assert_eq!(
            RgbColor::from_hex_lenient("fff").unwrap(),
            RgbColor::WHITE
        );
        assert_eq!(
            RgbColor::from_hex_lenient("#d5d86e").unwrap(),
            RgbColor::new(213, 216, 110)
        );
        assert!(RgbColor::from_hex_lenient("#abcd").is_err());
        assert!(RgbColor::from_hex_lenient("#xyz").is_err());
    }

    #[test]
    fn test_from_str_uses_lenient_parser() {
        let color: RgbColor = "#0f0".parse().unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_css_rgb() {
        assert_eq!(RgbColor::new(213, 216, 110).css_rgb(), "rgb(213, 216, 110)");
    }

    #[test]
    fn test_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::WHITE);
    }

    #[test]
    fn test_from_channels_clamped() {
        assert_eq!(
            RgbColor::from_channels_clamped(-20, 300, 128),
            RgbColor::new(0, 255, 128)
        );
    }

    // HSL conversion tests

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        let red = RgbColor::new(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 100.0).abs() < 0.01);
        assert!((red.l - 50.0).abs() < 0.01);

        let green = RgbColor::new(0, 255, 0).to_hsl();
        assert!((green.h - 120.0).abs() < 0.01);

        let blue = RgbColor::new(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        let gray = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.2).abs() < 0.1);

        let black = RgbColor::BLACK.to_hsl();
        assert_eq!(black.l, 0.0);

        let white = RgbColor::WHITE.to_hsl();
        assert_eq!(white.s, 0.0);
        assert!((white.l - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_tie_break_prefers_red() {
        // Yellow: red and green share the max, so the red branch is used.
        let yellow = RgbColor::new(255, 255, 0).to_hsl();
        assert!((yellow.h - 60.0).abs() < 0.01);

        // Cyan: green and blue share the max, so the green branch is used.
        let cyan = RgbColor::new(0, 255, 255).to_hsl();
        assert!((cyan.h - 180.0).abs() < 0.01);

        // Magenta: red and blue share the max; hue wraps to 300.
        let magenta = RgbColor::new(255, 0, 255).to_hsl();
        assert!((magenta.h - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_seed_color_hsl() {
        let hsl = RgbColor::new(0xd5, 0xd8, 0x6e).to_hsl();
        assert!((hsl.h - 61.7).abs() < 0.05, "hue was {}", hsl.h);
        assert!((hsl.s - 57.6).abs() < 0.1, "saturation was {}", hsl.s);
        assert!((hsl.l - 63.9).abs() < 0.1, "lightness was {}", hsl.l);
    }

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(RgbColor::from_hsl(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hsl(240.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_to_rgb_grayscale() {
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 0.0), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 100.0), RgbColor::WHITE);
        assert_eq!(RgbColor::from_hsl(180.0, 0.0, 50.0), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(RgbColor::from_hsl(360.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(-120.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_clamping() {
        assert_eq!(RgbColor::from_hsl(0.0, 150.0, 150.0), RgbColor::WHITE);
        assert_eq!(RgbColor::from_hsl(0.0, -10.0, -10.0), RgbColor::BLACK);
    }

    #[test]
    fn test_hsl_roundtrip() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(255, 0, 255),
            RgbColor::new(0, 255, 255),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
            RgbColor::new(1, 2, 3),
        ];

        for color in colors {
            let hsl = color.to_hsl();
            let converted = RgbColor::from_hsl(hsl.h, hsl.s, hsl.l);
            assert!(
                (i16::from(color.r) - i16::from(converted.r)).abs() <= 1,
                "Red channel mismatch: {} vs {}",
                color.r,
                converted.r
            );
            assert!(
                (i16::from(color.g) - i16::from(converted.g)).abs() <= 1,
                "Green channel mismatch: {} vs {}",
                color.g,
                converted.g
            );
            assert!(
                (i16::from(color.b) - i16::from(converted.b)).abs() <= 1,
                "Blue channel mismatch: {} vs {}",
                color.b,
                converted.b
            );
        }
    }

    #[test]
    fn test_brightness_threshold() {
        assert!(RgbColor::WHITE.is_light());
        assert!(!RgbColor::BLACK.is_light());
        // 128 is exactly the threshold and counts as dark
        assert!(!RgbColor::new(128, 128, 128).is_light());
        assert!(RgbColor::new(129, 129, 129).is_light());
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(RgbColor::WHITE.contrast_color(), RgbColor::BLACK);
        assert_eq!(RgbColor::BLACK.contrast_color(), RgbColor::WHITE);
        assert_eq!(RgbColor::new(0xd5, 0xd8, 0x6e).contrast_color(), RgbColor::BLACK);
    }

    #[test]
    fn test_scale_clamps() {
        let color = RgbColor::new(200, 100, 50);
        assert_eq!(color.scale(2.0), RgbColor::new(255, 200, 100));
        assert_eq!(color.scale(0.5), RgbColor::new(100, 50, 25));
    }

    #[test]
    fn test_serde_uses_channel_fields() {
        let color = RgbColor::new(0xd5, 0xd8, 0x6e);
        let json = serde_json::to_value(color).unwrap();
        assert_eq!(json, serde_json::json!({"r": 213, "g": 216, "b": 110}));

        let back: RgbColor = serde_json::from_value(json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<RgbColor>("\"#d5d86e\"").is_err());
    }
}
