//! CLI command handlers for Palettesmith.
//!
//! This module provides headless, scriptable access to the color engine for
//! automation, design-token pipelines and CI.

pub mod common;
pub mod config;
pub mod contrast;
pub mod convert;
pub mod export;
pub mod gallery;
pub mod generate;
pub mod harmony;
pub mod save;
pub mod share;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use convert::ConvertArgs;
pub use export::ExportArgs;
pub use gallery::GalleryArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
pub use save::SaveArgs;
pub use share::ShareArgs;
pub use validate::ValidateArgs;
