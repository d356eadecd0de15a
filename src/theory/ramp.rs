//! Tonal shade ramps derived from a single base color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{RgbColor, Shade, SHADE_LEVELS};

/// HSL lightness for each entry of [`SHADE_LEVELS`].
pub const SHADE_LIGHTNESS: [f64; 10] = [95.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0];

/// How the shades of a ramp are derived from its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampStrategy {
    /// Keep hue and saturation, place each shade at a fixed HSL lightness.
    /// Lightness strictly decreases from 50 to 900 for every base color.
    #[default]
    Lightness,
    /// Multiply the RGB channels by a factor above 1 for light shades and
    /// below 1 for dark ones. When clamping at 0 or 255 would leave two
    /// neighboring shades equally light, the lightness ramp is used instead.
    Brightness,
}

impl RampStrategy {
    /// All strategies, canonical first.
    pub const ALL: [Self; 2] = [Self::Lightness, Self::Brightness];

    /// Lowercase strategy name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for RampStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RampStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lightness" | "hsl" => Ok(Self::Lightness),
            "brightness" | "multiply" => Ok(Self::Brightness),
            _ => Err(format!(
                "Invalid ramp strategy '{s}'. Expected lightness or brightness"
            )),
        }
    }
}

/// Generates the canonical ten-shade ramp for `base`.
///
/// Hue and saturation of `base` are held fixed while lightness walks
/// [`SHADE_LIGHTNESS`].
///
/// # Examples
///
/// ```
/// use palettesmith::models::RgbColor;
/// use palettesmith::theory::generate_shade_ramp;
///
/// let ramp = generate_shade_ramp(RgbColor::new(255, 0, 0));
/// assert_eq!(ramp.len(), 10);
/// assert_eq!(ramp[5].color, RgbColor::new(255, 0, 0));
/// ```
#[must_use]
pub fn generate_shade_ramp(base: RgbColor) -> Vec<Shade> {
    ramp_with_strategy(base, RampStrategy::Lightness)
}

/// Generates a ten-shade ramp for `base` using the given strategy.
#[must_use]
pub fn ramp_with_strategy(base: RgbColor, strategy: RampStrategy) -> Vec<Shade> {
    match strategy {
        RampStrategy::Lightness => lightness_ramp(base),
        RampStrategy::Brightness => brightness_ramp(base),
    }
}

fn lightness_ramp(base: RgbColor) -> Vec<Shade> {
    let hsl = base.to_hsl();

    SHADE_LEVELS
        .iter()
        .zip(SHADE_LIGHTNESS)
        .map(|(&level, lightness)| Shade::new(level, hsl.with_lightness(lightness).to_rgb()))
        .collect()
}

fn brightness_ramp(base: RgbColor) -> Vec<Shade> {
    let ramp: Vec<Shade> = SHADE_LEVELS
        .iter()
        .map(|&level| Shade::new(level, base.scale(brightness_factor(level))))
        .collect();

    let strictly_darker = ramp
        .windows(2)
        .all(|pair| lightness_key(pair[0].color) > lightness_key(pair[1].color));

    if strictly_darker {
        ramp
    } else {
        lightness_ramp(base)
    }
}

/// `max + min` of the channels; HSL lightness is this value over 510.
fn lightness_key(color: RgbColor) -> u16 {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    u16::from(max) + u16::from(min)
}

/// Channel multiplier for a shade level: `step = level / 1000`, above 1 below
/// the 500 midpoint and below 1 past it.
fn brightness_factor(level: u16) -> f64 {
    let step = f64::from(level) / 1000.0;
    if step < 0.5 {
        1.0 + (0.5 - step) * 0.8
    } else {
        1.0 - (step - 0.5) * 0.8
    }
}
