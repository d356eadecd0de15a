//! Palette generation: from a seed color and a few switches to three ramps.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SECONDARY_COLOR, DEFAULT_TERTIARY_COLOR};
use crate::models::{ColorError, Palette, RgbColor};
use crate::theory::{derive_harmony, ramp_with_strategy, HarmonyMode, RampStrategy};

/// Everything needed to generate a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    /// Seed color for the primary ramp
    pub seed: RgbColor,
    /// Harmony mode; `None` means companions are picked manually
    pub harmony: Option<HarmonyMode>,
    /// Manual secondary color (ignored when a harmony mode is set)
    pub secondary: Option<RgbColor>,
    /// Manual tertiary color (ignored when a harmony mode is set)
    pub tertiary: Option<RgbColor>,
    /// Generate the secondary ramp
    pub include_secondary: bool,
    /// Generate the tertiary ramp
    pub include_tertiary: bool,
    /// Ramp algorithm
    pub strategy: RampStrategy,
}

impl PaletteRequest {
    /// Request with complementary harmony, both companions and the canonical
    /// ramp strategy.
    #[must_use]
    pub fn new(seed: RgbColor) -> Self {
        Self {
            seed,
            harmony: Some(HarmonyMode::default()),
            secondary: None,
            tertiary: None,
            include_secondary: true,
            include_tertiary: true,
            strategy: RampStrategy::default(),
        }
    }

    /// Builds a manual-mode request from an import list such as
    /// `"d5d86e,10b981,f59e0b"`.
    ///
    /// The first color seeds the primary ramp; the second and third, when
    /// present, become the companions. Missing companions are disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if the list is empty or any
    /// entry is not a valid hex color.
    pub fn from_import(list: &str) -> Result<Self, ColorError> {
        let colors = parse_import_list(list)?;
        let secondary = colors.get(1).copied();
        let tertiary = colors.get(2).copied();

        Ok(Self {
            seed: colors[0],
            harmony: None,
            secondary,
            tertiary,
            include_secondary: secondary.is_some(),
            include_tertiary: tertiary.is_some(),
            strategy: RampStrategy::default(),
        })
    }

    /// Switches to manual mode.
    #[must_use]
    pub fn manual(mut self) -> Self {
        self.harmony = None;
        self
    }
}

/// A palette plus the three base colors its ramps were generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    /// Primary, secondary and tertiary base colors; `None` for disabled slots
    pub base: [Option<RgbColor>; 3],
    /// The generated ramps
    pub palette: Palette,
}

/// Generates a palette.
///
/// With a harmony mode the companions come from [`derive_harmony`]; in manual
/// mode they are the supplied colors, falling back to the stock defaults. A
/// disabled companion yields an empty ramp.
///
/// # Examples
///
/// ```
/// use palettesmith::models::RgbColor;
/// use palettesmith::services::palette::{generate_palette, PaletteRequest};
///
/// let generated = generate_palette(&PaletteRequest::new(RgbColor::new(0xd5, 0xd8, 0x6e)));
/// assert_eq!(generated.palette.primary.len(), 10);
/// assert_eq!(generated.palette.color_count(), 30);
/// ```
#[must_use]
pub fn generate_palette(request: &PaletteRequest) -> GeneratedPalette {
    let (secondary, tertiary) = match request.harmony {
        Some(mode) => {
            let [_, secondary, tertiary] = derive_harmony(request.seed.to_hsl(), mode).to_rgb();
            (secondary, tertiary)
        }
        None => (
            request.secondary.unwrap_or(DEFAULT_SECONDARY_COLOR),
            request.tertiary.unwrap_or(DEFAULT_TERTIARY_COLOR),
        ),
    };

    let secondary = request.include_secondary.then_some(secondary);
    let tertiary = request.include_tertiary.then_some(tertiary);
    let ramp = |color: Option<RgbColor>| {
        color
            .map(|c| ramp_with_strategy(c, request.strategy))
            .unwrap_or_default()
    };

    GeneratedPalette {
        base: [Some(request.seed), secondary, tertiary],
        palette: Palette {
            primary: ramp_with_strategy(request.seed, request.strategy),
            secondary: ramp(secondary),
            tertiary: ramp(tertiary),
        },
    }
}

/// Parses a comma-separated list of hex colors (`#` optional, 3- or 6-digit).
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for an empty list or the first
/// entry that fails to parse.
pub fn parse_import_list(list: &str) -> Result<Vec<RgbColor>, ColorError> {
    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(RgbColor::from_hex_lenient)
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err(ColorError::InvalidColorFormat(list.to_string()));
    }

    Ok(colors)
}
