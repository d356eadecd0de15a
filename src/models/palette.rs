//! Palette data structures: named shades grouped into three ramps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Shade levels of a tonal ramp, lightest first.
pub const SHADE_LEVELS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A single shade of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    /// Shade level (50, 100, 200, ... 900).
    pub level: u16,
    /// The color at this level.
    pub color: RgbColor,
}

impl Shade {
    /// Creates a new shade.
    #[must_use]
    pub const fn new(level: u16, color: RgbColor) -> Self {
        Self { level, color }
    }

    /// Token name of this shade (e.g., "500").
    #[must_use]
    pub fn name(&self) -> String {
        self.level.to_string()
    }

    /// Hex code of this shade (e.g., "#d5d86e").
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// The three ramp slots of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    /// Ramp derived from the seed color
    Primary,
    /// First companion ramp
    Secondary,
    /// Second companion ramp
    Tertiary,
}

impl PaletteRole {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// Lowercase role name used in exported identifiers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated palette. Secondary and tertiary ramps are empty when the
/// companion color is disabled; otherwise every ramp has ten shades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Shades of the seed color.
    pub primary: Vec<Shade>,
    /// Shades of the first companion color.
    pub secondary: Vec<Shade>,
    /// Shades of the second companion color.
    pub tertiary: Vec<Shade>,
}

impl Palette {
    /// Returns the ramp for a role.
    #[must_use]
    pub fn ramp(&self, role: PaletteRole) -> &[Shade] {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Tertiary => &self.tertiary,
        }
    }

    /// Iterates over non-empty ramps in primary, secondary, tertiary order.
    pub fn ramps(&self) -> impl Iterator<Item = (PaletteRole, &[Shade])> {
        PaletteRole::ALL
            .into_iter()
            .map(move |role| (role, self.ramp(role)))
            .filter(|(_, shades)| !shades.is_empty())
    }

    /// True when no ramp holds any shade.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ramps().next().is_none()
    }

    /// Every shade color, flattened in ramp order.
    #[must_use]
    pub fn all_colors(&self) -> Vec<RgbColor> {
        self.ramps()
            .flat_map(|(_, shades)| shades.iter().map(|shade| shade.color))
            .collect()
    }

    /// Total number of shades across all ramps.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.ramps().map(|(_, shades)| shades.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(color: RgbColor) -> Vec<Shade> {
        SHADE_LEVELS.iter().map(|&level| Shade::new(level, color)).collect()
    }

    #[test]
    fn test_shade_name_and_hex() {
        let shade = Shade::new(500, RgbColor::new(0xd5, 0xd8, 0x6e));
        assert_eq!(shade.name(), "500");
        assert_eq!(shade.hex(), "#d5d86e");
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert_eq!(palette.color_count(), 0);
        assert!(palette.all_colors().is_empty());
    }

    #[test]
    fn test_ramps_skip_empty() {
        let palette = Palette {
            primary: ramp(RgbColor::BLACK),
            secondary: Vec::new(),
            tertiary: ramp(RgbColor::WHITE),
        };

        let roles: Vec<PaletteRole> = palette.ramps().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![PaletteRole::Primary, PaletteRole::Tertiary]);
        assert_eq!(palette.color_count(), 20);

        let colors = palette.all_colors();
        assert_eq!(colors[0], RgbColor::BLACK);
        assert_eq!(colors[10], RgbColor::WHITE);
    }

    #[test]
    fn test_role_names() {
        assert_eq!(PaletteRole::Secondary.to_string(), "secondary");
        assert_eq!(
            serde_json::to_string(&PaletteRole::Tertiary).unwrap(),
            "\"tertiary\""
        );
    }
}
