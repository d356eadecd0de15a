//! Share links: a titled palette serialized to JSON and carried in the
//! `palette` query parameter of a URL.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_PALETTE_TITLE;
use crate::models::{ColorError, Palette, PaletteRole, RgbColor, Shade, SHADE_LEVELS};

/// Query parameter holding the encoded palette.
pub const SHARE_QUERY_KEY: &str = "palette";

/// Errors raised while reading a share link.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Nothing to decode.
    #[error("Share link has no palette data")]
    Empty,
    /// Percent-decoding produced invalid UTF-8.
    #[error("Share data is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    /// The decoded text is not a palette document.
    #[error("Share data is not a valid palette document: {0}")]
    Json(#[from] serde_json::Error),
    /// A ramp is neither empty nor complete.
    #[error("{role} ramp must have 0 or {expected} shades, found {found}")]
    RampLength {
        /// Offending ramp
        role: PaletteRole,
        /// Shades in a complete ramp
        expected: usize,
        /// Shades received
        found: usize,
    },
    /// A shade name does not match its position in the ramp.
    #[error("{role} shade {index} is named '{name}', expected '{expected}'")]
    ShadeName {
        /// Offending ramp
        role: PaletteRole,
        /// Position in the ramp
        index: usize,
        /// Name received
        name: String,
        /// Name required at that position
        expected: u16,
    },
    /// A shade carries an invalid hex color.
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// A palette recovered from a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPalette {
    /// Title chosen by the sharer
    pub title: String,
    /// The shared ramps
    pub palette: Palette,
}

#[derive(Debug, Serialize, Deserialize)]
struct ShareDocument {
    #[serde(default = "default_title")]
    title: String,
    palette: ShareRamps,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ShareRamps {
    #[serde(default)]
    primary: Vec<ShareShade>,
    #[serde(default)]
    secondary: Vec<ShareShade>,
    #[serde(default)]
    tertiary: Vec<ShareShade>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ShareShade {
    name: String,
    hex: String,
    #[serde(default)]
    rgb: String,
}

fn default_title() -> String {
    DEFAULT_PALETTE_TITLE.to_string()
}

impl From<&Shade> for ShareShade {
    fn from(shade: &Shade) -> Self {
        Self {
            name: shade.name(),
            hex: shade.hex(),
            rgb: shade.color.css_rgb(),
        }
    }
}

fn encode_ramp(shades: &[Shade]) -> Vec<ShareShade> {
    shades.iter().map(ShareShade::from).collect()
}

fn decode_ramp(role: PaletteRole, shades: &[ShareShade]) -> Result<Vec<Shade>, ShareError> {
    if !shades.is_empty() && shades.len() != SHADE_LEVELS.len() {
        return Err(ShareError::RampLength {
            role,
            expected: SHADE_LEVELS.len(),
            found: shades.len(),
        });
    }

    shades
        .iter()
        .zip(SHADE_LEVELS)
        .enumerate()
        .map(|(index, (shade, level))| {
            if shade.name.trim() != level.to_string() {
                return Err(ShareError::ShadeName {
                    role,
                    index,
                    name: shade.name.clone(),
                    expected: level,
                });
            }
            Ok(Shade::new(level, RgbColor::from_hex(&shade.hex)?))
        })
        .collect()
}

/// Encodes `title` and `palette` as a percent-encoded JSON query value.
///
/// The JSON document is `{ "title", "palette": { "primary": [{ "name",
/// "hex", "rgb" }], "secondary": [...], "tertiary": [...] } }`.
pub fn share_payload(title: &str, palette: &Palette) -> Result<String, ShareError> {
    let document = ShareDocument {
        title: title.to_string(),
        palette: ShareRamps {
            primary: encode_ramp(&palette.primary),
            secondary: encode_ramp(&palette.secondary),
            tertiary: encode_ramp(&palette.tertiary),
        },
    };
    let json = serde_json::to_string(&document)?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Builds `{base_url}?palette={payload}`.
///
/// # Examples
///
/// ```
/// use palettesmith::models::RgbColor;
/// use palettesmith::services::palette::{generate_palette, PaletteRequest};
/// use palettesmith::services::share::{parse_share_payload, share_link};
///
/// let generated = generate_palette(&PaletteRequest::new(RgbColor::new(0xd5, 0xd8, 0x6e)));
/// let link = share_link("https://example.com/", "Lime", &generated.palette)?;
/// assert!(link.starts_with("https://example.com?palette=%7B"));
///
/// let shared = parse_share_payload(&link)?;
/// assert_eq!(shared.title, "Lime");
/// assert_eq!(shared.palette, generated.palette);
/// # Ok::<(), palettesmith::services::share::ShareError>(())
/// ```
pub fn share_link(base_url: &str, title: &str, palette: &Palette) -> Result<String, ShareError> {
    Ok(format!(
        "{}?{SHARE_QUERY_KEY}={}",
        base_url.trim().trim_end_matches('/'),
        share_payload(title, palette)?
    ))
}

/// Extracts the encoded value from a full link, a bare query string or the
/// value itself.
fn payload_value(input: &str) -> &str {
    let query = input.split_once('?').map_or(input, |(_, query)| query);
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(SHARE_QUERY_KEY)?.strip_prefix('='))
        .unwrap_or(input)
}

/// Reads a palette back from a share link.
///
/// Accepts the full link, the percent-encoded query value, or the raw JSON
/// document. Each ramp must be empty or hold the ten shades in level order.
pub fn parse_share_payload(input: &str) -> Result<SharedPalette, ShareError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ShareError::Empty);
    }

    let json = if input.starts_with('{') {
        input.to_string()
    } else {
        let value = payload_value(input);
        if value.is_empty() {
            return Err(ShareError::Empty);
        }
        urlencoding::decode(&value.replace('+', " "))?.into_owned()
    };

    let document: ShareDocument = serde_json::from_str(&json)?;
    let ramps = &document.palette;

    Ok(SharedPalette {
        title: document.title,
        palette: Palette {
            primary: decode_ramp(PaletteRole::Primary, &ramps.primary)?,
            secondary: decode_ramp(PaletteRole::Secondary, &ramps.secondary)?,
            tertiary: decode_ramp(PaletteRole::Tertiary, &ramps.tertiary)?,
        },
    })
}
