//! Brightness and contrast measures.
//!
//! Two scales live here:
//!
//! - BT.601 perceived brightness (0-255), which drives the light/dark split
//!   and the black-or-white text choice.
//! - WCAG 2.1 relative luminance and contrast ratio (1-21), used to grade
//!   foreground/background pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RgbColor;

/// Perceived brightness using ITU-R BT.601 weights.
#[must_use]
pub fn brightness(color: RgbColor) -> f64 {
    color.brightness()
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    /// Below 3:1
    Fail,
    /// At least 3:1, enough for large text only
    AaLarge,
    /// At least 4.5:1
    Aa,
    /// At least 7:1
    Aaa,
}

impl WcagLevel {
    /// Classifies a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}
