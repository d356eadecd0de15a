//! Code export for generated palettes.
//!
//! Renders a [`Palette`] as a Tailwind 3 config snippet, CSS custom
//! properties, SCSS variables or a JSON document. Every target walks the
//! ramps in primary, secondary, tertiary order and skips empty ramps.

pub mod json;
pub mod stylesheet;
pub mod tailwind;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Palette, RgbColor};

pub use json::{export_json, export_json_at};
pub use stylesheet::{export_css, export_scss};
pub use tailwind::export_tailwind;

/// Output flavor of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    /// `tailwind.config.js` color block
    #[default]
    Tailwind3,
    /// CSS custom properties on `:root`
    Css,
    /// SCSS variables
    Scss,
    /// JSON document
    Json,
}

impl ExportTarget {
    /// All export targets.
    pub const ALL: [Self; 4] = [Self::Tailwind3, Self::Css, Self::Scss, Self::Json];

    /// Lowercase target name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tailwind3 => "tailwind3",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }

    /// File extension for exported files.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Tailwind3 => "js",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tailwind3" | "tailwind" => Ok(Self::Tailwind3),
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid export target '{s}'. Expected tailwind3, css, scss, or json"
            )),
        }
    }
}

/// Notation used for color values inside exported code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl ColorFormat {
    /// All color formats.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(format!("Invalid color format '{s}'. Expected hex, rgb, or hsl")),
        }
    }
}

/// Formats a color value in the given notation.
///
/// # Examples
///
/// ```
/// use palettesmith::export::{format_color, ColorFormat};
/// use palettesmith::models::RgbColor;
///
/// let red = RgbColor::new(255, 0, 0);
/// assert_eq!(format_color(red, ColorFormat::Hex), "#ff0000");
/// assert_eq!(format_color(red, ColorFormat::Rgb), "rgb(255, 0, 0)");
/// assert_eq!(format_color(red, ColorFormat::Hsl), "hsl(0, 100%, 50%)");
/// ```
#[must_use]
pub fn format_color(color: RgbColor, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.to_hex(),
        ColorFormat::Rgb => color.css_rgb(),
        ColorFormat::Hsl => color.to_hsl().css_hsl(),
    }
}

/// Renders `palette` as code for `target`.
#[must_use]
pub fn export_palette(
    palette: &Palette,
    title: &str,
    target: ExportTarget,
    format: ColorFormat,
) -> String {
    match target {
        ExportTarget::Tailwind3 => export_tailwind(palette, title, format),
        ExportTarget::Css => export_css(palette, title, format),
        ExportTarget::Scss => export_scss(palette, title, format),
        ExportTarget::Json => export_json(palette, title, format),
    }
}

/// Suggested file name for an export, e.g. `lime-harmony-palette.css`.
///
/// The title is lowercased and each run of whitespace becomes a single
/// hyphen. A blank title yields plain `palette.<ext>`.
#[must_use]
pub fn export_file_name(title: &str, target: ExportTarget) -> String {
    let slug = title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("palette.{}", target.extension())
    } else {
        format!("{slug}-palette.{}", target.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::palette::{generate_palette, PaletteRequest};

    fn palette() -> Palette {
        generate_palette(&PaletteRequest::new(RgbColor::new(0xd5, 0xd8, 0x6e))).palette
    }

    #[test]
    fn test_format_color() {
        let color = RgbColor::new(0x10, 0xb9, 0x81);
        assert_eq!(format_color(color, ColorFormat::Hex), "#10b981");
        assert_eq!(format_color(color, ColorFormat::Rgb), "rgb(16, 185, 129)");
        assert!(format_color(color, ColorFormat::Hsl).starts_with("hsl(160, "));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Lime Harmony", ExportTarget::Tailwind3),
            "lime-harmony-palette.js"
        );
        assert_eq!(
            export_file_name("  Deep   Sea\tBlue ", ExportTarget::Scss),
            "deep-sea-blue-palette.scss"
        );
        assert_eq!(export_file_name("", ExportTarget::Css), "palette.css");
        assert_eq!(export_file_name("   ", ExportTarget::Css), "palette.css");
        assert_eq!(export_file_name("x", ExportTarget::Json), "x-palette.json");
    }

    #[test]
    fn test_export_palette_dispatches() {
        let palette = palette();
        let lightest = palette.primary[0].hex();
        for target in ExportTarget::ALL {
            let code = export_palette(&palette, "Lime Harmony", target, ColorFormat::Hex);
            assert!(code.contains("Lime Harmony"), "{target}");
            assert!(code.contains(&lightest), "{target}");
        }
    }

    #[test]
    fn test_target_and_format_parse() {
        assert_eq!("Tailwind".parse::<ExportTarget>().unwrap(), ExportTarget::Tailwind3);
        assert_eq!("scss".parse::<ExportTarget>().unwrap(), ExportTarget::Scss);
        assert!("less".parse::<ExportTarget>().is_err());
        assert_eq!("HSL".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert!("cmyk".parse::<ColorFormat>().is_err());
        assert_eq!(ExportTarget::Tailwind3.to_string(), "tailwind3");
    }
}
