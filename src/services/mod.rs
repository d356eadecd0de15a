//! Service layer for business logic.
//!
//! This module contains services that encapsulate palette generation, the
//! JSON report shapes, share links and the file I/O around gallery dumps and exported code.

pub mod files;
pub mod palette;
pub mod report;
pub mod share;

// Re-export commonly used types and functions
pub use files::{ExportService, GalleryService};
pub use palette::{generate_palette, parse_import_list, GeneratedPalette, PaletteRequest};
pub use report::{ColorReport, ContrastReport, HarmonyReport, PaletteReport, SharedPaletteReport};
pub use share::{parse_share_payload, share_link, share_payload, SharedPalette, ShareError};
