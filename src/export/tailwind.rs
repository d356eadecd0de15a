//! Tailwind 3 `theme.extend.colors` block.

use std::fmt::Write as _;

use super::{format_color, ColorFormat};
use crate::models::Palette;

/// Renders a `module.exports` snippet for `tailwind.config.js`.
///
/// Each non-empty ramp becomes a nested object keyed by shade token:
///
/// ```text
/// // Lime Harmony - Tailwind CSS Configuration
/// module.exports = {
///   theme: {
///     extend: {
///       colors: {
///         primary: {
///           '50': '#fbfbef',
///           ...
///         },
///       }
///     }
///   }
/// }
/// ```
#[must_use]
pub fn export_tailwind(palette: &Palette, title: &str, format: ColorFormat) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "// {title} - Tailwind CSS Configuration");
    output.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");

    for (role, shades) in palette.ramps() {
        let _ = writeln!(output, "        {role}: {{");
        for shade in shades {
            let _ = writeln!(
                output,
                "          '{}': '{}',",
                shade.name(),
                format_color(shade.color, format)
            );
        }
        output.push_str("        },\n");
    }

    output.push_str("      }\n    }\n  }\n}");
    output
}
