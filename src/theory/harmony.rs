//! Harmony modes: companion hues at fixed angles from a base hue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{HslColor, RgbColor};

/// Saturation multiplier applied to the tertiary color in complementary mode.
pub const COMPLEMENTARY_TERTIARY_SATURATION: f64 = 0.8;

/// Angular relationship used to derive secondary and tertiary hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Opposite hue (+180°) plus a muted +60° accent
    #[default]
    Complementary,
    /// Neighbors at +30° and -30°
    Analogous,
    /// Evenly spaced at +120° and +240°
    Triadic,
}

impl HarmonyMode {
    /// All harmony modes.
    pub const ALL: [Self; 3] = [Self::Complementary, Self::Analogous, Self::Triadic];

    /// Lowercase mode name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Complementary => "opposite hue plus a softer accent 60° away",
            Self::Analogous => "neighboring hues 30° on either side",
            Self::Triadic => "three hues evenly spaced around the wheel",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" => Ok(Self::Triadic),
            _ => Err(format!(
                "Invalid harmony mode '{s}'. Expected complementary, analogous, or triadic"
            )),
        }
    }
}

/// A base color and the two companions derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmony {
    /// The base color, unchanged
    pub primary: HslColor,
    /// First companion
    pub secondary: HslColor,
    /// Second companion
    pub tertiary: HslColor,
}

impl Harmony {
    /// Converts all three colors to RGB, primary first.
    #[must_use]
    pub fn to_rgb(&self) -> [RgbColor; 3] {
        [
            self.primary.to_rgb(),
            self.secondary.to_rgb(),
            self.tertiary.to_rgb(),
        ]
    }
}

/// Derives the secondary and tertiary colors for `base` under `mode`.
///
/// Companions keep the base lightness. Saturation is kept as well, except
/// the complementary tertiary which is scaled by
/// [`COMPLEMENTARY_TERTIARY_SATURATION`].
///
/// # Examples
///
/// ```
/// use palettesmith::models::HslColor;
/// use palettesmith::theory::{derive_harmony, HarmonyMode};
///
/// let harmony = derive_harmony(HslColor::new(200.0, 50.0, 50.0), HarmonyMode::Complementary);
/// assert!((harmony.secondary.h - 20.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn derive_harmony(base: HslColor, mode: HarmonyMode) -> Harmony {
    let (secondary, tertiary) = match mode {
        HarmonyMode::Complementary => (
            base.rotate(180.0),
            base.rotate(60.0)
                .with_saturation(base.s * COMPLEMENTARY_TERTIARY_SATURATION),
        ),
        HarmonyMode::Analogous => (base.rotate(30.0), base.rotate(-30.0)),
        HarmonyMode::Triadic => (base.rotate(120.0), base.rotate(240.0)),
    };

    Harmony {
        primary: base,
        secondary,
        tertiary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> HslColor {
        HslColor::new(200.0, 50.0, 50.0)
    }

    #[test]
    fn test_complementary() {
        let h = derive_harmony(base(), HarmonyMode::Complementary);
        assert!((h.secondary.h - 20.0).abs() < 1e-9);
        assert!((h.secondary.s - 50.0).abs() < 1e-9);
        assert!((h.tertiary.h - 260.0).abs() < 1e-9);
        assert!((h.tertiary.s - 40.0).abs() < 1e-9);
        assert!((h.tertiary.l - 50.0).abs() < 1e-9);
        assert_eq!(h.primary, base());
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        let h = derive_harmony(HslColor::new(10.0, 60.0, 40.0), HarmonyMode::Analogous);
        assert!((h.secondary.h - 40.0).abs() < 1e-9);
        assert!((h.tertiary.h - 340.0).abs() < 1e-9);
        assert!((h.tertiary.s - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_triadic() {
        let h = derive_harmony(base(), HarmonyMode::Triadic);
        assert!((h.secondary.h - 320.0).abs() < 1e-9);
        assert!((h.tertiary.h - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_companions_share_lightness() {
        for mode in HarmonyMode::ALL {
            let h = derive_harmony(base(), mode);
            assert!((h.secondary.l - 50.0).abs() < 1e-9, "{mode}");
            assert!((h.tertiary.l - 50.0).abs() < 1e-9, "{mode}");
        }
    }

    #[test]
    fn test_to_rgb() {
        let red = HslColor::new(0.0, 100.0, 50.0);
        let [primary, secondary, _] = derive_harmony(red, HarmonyMode::Complementary).to_rgb();
        assert_eq!(primary, RgbColor::new(255, 0, 0));
        assert_eq!(secondary, RgbColor::new(0, 255, 255));
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("Triadic".parse::<HarmonyMode>().unwrap(), HarmonyMode::Triadic);
        assert!("split".parse::<HarmonyMode>().is_err());
        assert_eq!(HarmonyMode::Analogous.to_string(), "analogous");
        assert_eq!(
            serde_json::to_string(&HarmonyMode::Complementary).unwrap(),
            "\"complementary\""
        );
    }
}
