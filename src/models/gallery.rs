//! Community gallery entries and the filtering applied when browsing them.
//!
//! Rows are fetched elsewhere; this module only decides which of them to show
//! and in what order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::{Palette, RgbColor, Shade};

/// Default number of rows returned by a gallery query.
pub const DEFAULT_GALLERY_LIMIT: usize = 50;

/// Number of primary shades stored with a saved palette.
pub const SAVED_COLOR_COUNT: usize = 5;

/// Name given to palettes saved without one.
pub const UNTITLED_PALETTE_NAME: &str = "Untitled Palette";

/// A palette saved to the community gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Hex codes of the palette's swatches (the lightest primary shades)
    pub colors: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Like counter
    #[serde(default)]
    pub likes: u32,
    /// How many times the palette was copied
    #[serde(default)]
    pub copied_count: u32,
    /// How many times the palette was exported
    #[serde(default)]
    pub exported_count: u32,
    /// Whether the palette is listed publicly
    #[serde(default = "default_public")]
    pub is_public: bool,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_public() -> bool {
    true
}

impl SavedPalette {
    /// Builds a new public gallery row from a generated palette.
    ///
    /// The row keeps the first [`SAVED_COLOR_COUNT`] primary shades. A blank
    /// name becomes [`UNTITLED_PALETTE_NAME`].
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::{RgbColor, SavedPalette};
    /// use palettesmith::services::palette::{generate_palette, PaletteRequest};
    ///
    /// let generated = generate_palette(&PaletteRequest::new(RgbColor::new(0xd5, 0xd8, 0x6e)));
    /// let saved = SavedPalette::from_palette("Lime", &generated.palette);
    /// assert_eq!(saved.colors.len(), 5);
    /// assert_eq!(saved.colors[0], "#f9faeb");
    /// ```
    #[must_use]
    pub fn from_palette(name: &str, palette: &Palette) -> Self {
        let name = name.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            name: if name.is_empty() { UNTITLED_PALETTE_NAME } else { name }.to_string(),
            colors: palette
                .primary
                .iter()
                .take(SAVED_COLOR_COUNT)
                .map(Shade::hex)
                .collect(),
            created_at: Utc::now(),
            likes: 0,
            copied_count: 0,
            exported_count: 0,
            is_public: true,
            tags: Vec::new(),
        }
    }

    /// Mean brightness of the palette's colors, if any are valid.
    #[must_use]
    pub fn average_brightness(&self) -> Option<f64> {
        average_brightness(&self.colors)
    }
}

/// Mean BT.601 brightness over the valid hex entries of `colors`.
///
/// Entries that fail to parse are skipped. Returns `None` when no entry is
/// valid.
#[must_use]
pub fn average_brightness<S: AsRef<str>>(colors: &[S]) -> Option<f64> {
    let (total, count) = colors
        .iter()
        .filter_map(|hex| RgbColor::from_hex(hex.as_ref()).ok())
        .fold((0.0, 0_u32), |(total, count), color| {
            (total + color.brightness(), count + 1)
        });

    (count > 0).then(|| total / f64::from(count))
}

/// Brightness bucket filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessFilter {
    /// Keep every palette
    #[default]
    All,
    /// Keep palettes whose average brightness is above 128
    Light,
    /// Keep palettes whose average brightness is 128 or below
    Dark,
}

impl BrightnessFilter {
    /// Returns true if a palette with the given average brightness passes.
    #[must_use]
    pub fn matches(&self, average: Option<f64>) -> bool {
        match (self, average) {
            (Self::All, _) => true,
            (Self::Light, Some(avg)) => avg > 128.0,
            (Self::Dark, Some(avg)) => avg <= 128.0,
            (_, None) => false,
        }
    }
}

impl FromStr for BrightnessFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!(
                "Invalid brightness filter '{s}'. Expected all, light, or dark"
            )),
        }
    }
}

impl fmt::Display for BrightnessFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Light => "light",
            Self::Dark => "dark",
        };
        f.write_str(name)
    }
}

/// Gallery ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Recent,
    /// Most liked first, then most copied, then newest
    Popular,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "popular" => Ok(Self::Popular),
            _ => Err(format!("Invalid sort order '{s}'. Expected recent or popular")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
        })
    }
}

/// Search, filter, sort and limit settings for browsing the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    /// Case-insensitive substring matched against palette names
    #[serde(default)]
    pub search: String,
    /// Brightness bucket
    #[serde(default)]
    pub brightness: BrightnessFilter,
    /// Result ordering
    #[serde(default)]
    pub sort: SortOrder,
    /// Maximum number of rows returned
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_GALLERY_LIMIT
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            brightness: BrightnessFilter::All,
            sort: SortOrder::Recent,
            limit: DEFAULT_GALLERY_LIMIT,
        }
    }
}

impl GalleryQuery {
    /// Applies the query to a set of rows, returning at most `limit` of them.
    ///
    /// Only public palettes are considered.
    #[must_use]
    pub fn apply<'a>(&self, palettes: &'a [SavedPalette]) -> Vec<&'a SavedPalette> {
        let mut rows = self.matching(palettes);
        rows.truncate(self.limit);
        rows
    }

    /// Every public row passing the search and brightness filter, sorted but
    /// not limited.
    #[must_use]
    pub fn matching<'a>(&self, palettes: &'a [SavedPalette]) -> Vec<&'a SavedPalette> {
        let needle = self.search.trim().to_lowercase();

        let mut rows: Vec<&SavedPalette> = palettes
            .iter()
            .filter(|p| p.is_public)
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .filter(|p| self.brightness.matches(p.average_brightness()))
            .collect();

        match self.sort {
            SortOrder::Recent => rows.sort_by_key(|p| Reverse(p.created_at)),
            SortOrder::Popular => {
                rows.sort_by_key(|p| {
                    (Reverse(p.likes), Reverse(p.copied_count), Reverse(p.created_at))
                });
            }
        }

        rows
    }
}
