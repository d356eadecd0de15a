//! HSL color values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rgb::RgbColor;

/// A color in the HSL cylinder.
///
/// Hue is in degrees [0, 360); saturation and lightness are percentages
/// [0, 100]. Components are kept unrounded so harmony arithmetic stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl HslColor {
    /// Creates a normalized HSL color: hue wraps modulo 360, saturation and
    /// lightness are clamped to [0, 100].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        // rem_euclid rounds tiny negative hues up to exactly 360
        let h = h.rem_euclid(360.0);
        Self {
            h: if h >= 360.0 { 0.0 } else { h },
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Rotates the hue by `degrees`, wrapping around the color wheel.
    #[must_use]
    pub fn rotate(&self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Returns a copy with a different saturation.
    #[must_use]
    pub fn with_saturation(&self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Returns a copy with a different lightness.
    #[must_use]
    pub fn with_lightness(&self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Converts to integer RGB channels.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(self.h, self.s, self.l)
    }

    /// Formats as a CSS `hsl(h, s%, l%)` function with rounded components.
    #[must_use]
    pub fn css_hsl(&self) -> String {
        // A hue that rounds up to 360 is the same angle as 0.
        let h = self.h.round() % 360.0;
        format!("hsl({h}, {}%, {}%)", self.s.round(), self.l.round())
    }
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self {
        rgb.to_hsl()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_hsl())
    }
}
