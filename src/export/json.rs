//! JSON export document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::{format_color, ColorFormat};
use crate::models::Palette;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    title: &'a str,
    format: ColorFormat,
    exported_at: DateTime<Utc>,
    palette: BTreeMap<&'static str, Vec<ExportedShade>>,
}

#[derive(Serialize)]
struct ExportedShade {
    name: String,
    value: String,
}

/// Renders the palette as a pretty-printed JSON document stamped with the
/// current time.
#[must_use]
pub fn export_json(palette: &Palette, title: &str, format: ColorFormat) -> String {
    export_json_at(palette, title, format, Utc::now())
}

/// Renders the palette as JSON with an explicit `exportedAt` timestamp.
#[must_use]
pub fn export_json_at(
    palette: &Palette,
    title: &str,
    format: ColorFormat,
    exported_at: DateTime<Utc>,
) -> String {
    let palette: BTreeMap<_, Vec<ExportedShade>> = palette
        .ramps()
        .map(|(role, shades)| {
            let shades = shades
                .iter()
                .map(|shade| ExportedShade {
                    name: shade.name(),
                    value: format_color(shade.color, format),
                })
                .collect::<Vec<_>>();
            (role.as_str(), shades)
        })
        .collect();

    let document = ExportDocument {
        title,
        format,
        exported_at,
        palette,
    };

    // Only strings and maps with string keys; serialization cannot fail.
    serde_json::to_string_pretty(&document).unwrap_or_default()
}
