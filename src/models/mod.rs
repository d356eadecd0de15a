//! Data models for colors, palettes and gallery entries.
//!
//! This module contains the value types used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod error;
pub mod gallery;
pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use error::ColorError;
pub use gallery::{BrightnessFilter, GalleryQuery, SavedPalette, SortOrder};
pub use hsl::HslColor;
pub use palette::{Palette, PaletteRole, Shade, SHADE_LEVELS};
pub use rgb::RgbColor;
