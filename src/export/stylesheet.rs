//! CSS custom properties and SCSS variables.

use std::fmt::Write as _;

use super::{format_color, ColorFormat};
use crate::models::Palette;

/// Renders every shade as a `--{role}-{token}` custom property on `:root`.
#[must_use]
pub fn export_css(palette: &Palette, title: &str, format: ColorFormat) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "/* {title} - CSS Variables */");
    output.push_str(":root {\n");
    for (role, shades) in palette.ramps() {
        for shade in shades {
            let _ = writeln!(
                output,
                "  --{role}-{}: {};",
                shade.name(),
                format_color(shade.color, format)
            );
        }
    }
    output.push('}');

    output
}

/// Renders every shade as a `${role}-{token}` SCSS variable.
#[must_use]
pub fn export_scss(palette: &Palette, title: &str, format: ColorFormat) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "// {title} - SCSS Variables");
    for (role, shades) in palette.ramps() {
        for shade in shades {
            let _ = writeln!(
                output,
                "${role}-{}: {};",
                shade.name(),
                format_color(shade.color, format)
            );
        }
    }

    output
}
