//! Save command: append a generated palette to a local gallery file.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::cli::common::{print_json, CliError, CliResult, PaletteArgs};
use crate::config::Config;
use crate::models::SavedPalette;
use crate::services::palette::generate_palette;
use crate::services::GalleryService;

/// Save a generated palette to a gallery file
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    /// Palette name (blank names are saved as "Untitled Palette")
    #[arg(short, long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Gallery JSON file to append to (created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Print the saved row as JSON
    #[arg(long)]
    pub json: bool,
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let request = self.palette.to_request(&config.generator)?;
        let generated = generate_palette(&request);

        let row = SavedPalette::from_palette(&self.name, &generated.palette);
        let rows = GalleryService::append(row.clone(), &self.file)
            .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        info!(id = %row.id, path = %self.file.display(), "saved palette");

        if self.json {
            return print_json(&row);
        }

        println!(
            "✓ Saved \"{}\" ({}) to {} ({} palettes)",
            row.name,
            row.colors.join(" "),
            self.file.display(),
            rows.len()
        );
        Ok(())
    }
}
