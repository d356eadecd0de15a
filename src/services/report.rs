//! Serializable views of engine results.
//!
//! Shared by the CLI `--json` output and the web API so both surfaces emit
//! the same document shapes.

use serde::Serialize;

use crate::models::{HslColor, Palette, PaletteRole, RgbColor, Shade};
use crate::services::palette::{GeneratedPalette, PaletteRequest};
use crate::services::share::SharedPalette;
use crate::theory::{contrast_ratio, derive_harmony, HarmonyMode, RampStrategy, WcagLevel};

/// Everything the engine knows about a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// `#rrggbb`
    pub hex: String,
    /// Integer channels
    pub rgb: RgbColor,
    /// Unrounded HSL components
    pub hsl: HslColor,
    /// `rgb(r, g, b)`
    pub css_rgb: String,
    /// `hsl(h, s%, l%)`
    pub css_hsl: String,
    /// BT.601 brightness rounded to two decimals
    pub brightness: f64,
    /// Brightness above 128
    pub is_light: bool,
    /// Black or white, whichever reads on top of this color
    pub contrast_color: String,
}

impl ColorReport {
    /// Describes `color`.
    #[must_use]
    pub fn new(color: RgbColor) -> Self {
        let hsl = color.to_hsl();
        Self {
            hex: color.to_hex(),
            rgb: color,
            hsl,
            css_rgb: color.css_rgb(),
            css_hsl: hsl.css_hsl(),
            brightness: round2(color.brightness()),
            is_light: color.is_light(),
            contrast_color: color.contrast_color().to_hex(),
        }
    }
}

/// WCAG grading of a foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Foreground hex
    pub foreground: String,
    /// Background hex
    pub background: String,
    /// Ratio rounded to two decimals
    pub ratio: f64,
    /// Highest level reached
    pub level: WcagLevel,
    /// At least 4.5:1
    pub passes_aa: bool,
    /// At least 7:1
    pub passes_aaa: bool,
}

impl ContrastReport {
    /// Grades `foreground` on `background`.
    #[must_use]
    pub fn new(foreground: RgbColor, background: RgbColor) -> Self {
        let ratio = contrast_ratio(foreground, background);
        let level = WcagLevel::from_ratio(ratio);
        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio: round2(ratio),
            level,
            passes_aa: level >= WcagLevel::Aa,
            passes_aaa: level >= WcagLevel::Aaa,
        }
    }
}

/// A base color and its two harmony companions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonyReport {
    /// Harmony mode
    pub mode: HarmonyMode,
    /// One-line description of the mode
    pub description: &'static str,
    /// The seed color
    pub primary: ColorReport,
    /// First companion
    pub secondary: ColorReport,
    /// Second companion
    pub tertiary: ColorReport,
}

impl HarmonyReport {
    /// Derives and describes the harmony of `seed`.
    #[must_use]
    pub fn new(seed: RgbColor, mode: HarmonyMode) -> Self {
        let [_, secondary, tertiary] = derive_harmony(seed.to_hsl(), mode).to_rgb();
        Self {
            mode,
            description: mode.description(),
            primary: ColorReport::new(seed),
            secondary: ColorReport::new(secondary),
            tertiary: ColorReport::new(tertiary),
        }
    }
}

/// One shade as `{ name, hex }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadeReport {
    /// Shade token (e.g., "500")
    pub name: String,
    /// `#rrggbb`
    pub hex: String,
}

impl From<&Shade> for ShadeReport {
    fn from(shade: &Shade) -> Self {
        Self {
            name: shade.name(),
            hex: shade.hex(),
        }
    }
}

/// Base colors of a generated palette; `None` for disabled companions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct BaseReport {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

/// Ramps of a generated palette keyed by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct RampsReport {
    pub primary: Vec<ShadeReport>,
    pub secondary: Vec<ShadeReport>,
    pub tertiary: Vec<ShadeReport>,
}

impl From<&Palette> for RampsReport {
    fn from(palette: &Palette) -> Self {
        let ramp = |role| palette.ramp(role).iter().map(ShadeReport::from).collect();
        Self {
            primary: ramp(PaletteRole::Primary),
            secondary: ramp(PaletteRole::Secondary),
            tertiary: ramp(PaletteRole::Tertiary),
        }
    }
}

/// A generated palette together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    /// Seed hex
    pub seed: String,
    /// `None` in manual mode
    pub harmony: Option<HarmonyMode>,
    /// Ramp algorithm used
    pub strategy: RampStrategy,
    /// Base colors the ramps were built from
    pub base: BaseReport,
    /// The ramps
    pub palette: RampsReport,
}

impl PaletteReport {
    /// Builds the report for a generated palette.
    #[must_use]
    pub fn new(request: &PaletteRequest, generated: &GeneratedPalette) -> Self {
        let [primary, secondary, tertiary] = generated.base.map(|c| c.map(|c| c.to_hex()));
        Self {
            seed: request.seed.to_hex(),
            harmony: request.harmony,
            strategy: request.strategy,
            base: BaseReport {
                primary,
                secondary,
                tertiary,
            },
            palette: RampsReport::from(&generated.palette),
        }
    }
}

/// A palette opened from a share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedPaletteReport {
    /// Title chosen by the sharer
    pub title: String,
    /// The ramps
    pub palette: RampsReport,
}

impl From<&SharedPalette> for SharedPaletteReport {
    fn from(shared: &SharedPalette) -> Self {
        Self {
            title: shared.title.clone(),
            palette: RampsReport::from(&shared.palette),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
