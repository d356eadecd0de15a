//! Export command: generate a palette and render it as code.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::cli::common::{CliError, CliResult, PaletteArgs};
use crate::config::Config;
use crate::constants::DEFAULT_PALETTE_TITLE;
use crate::export::{export_file_name, export_palette, ColorFormat, ExportTarget};
use crate::services::palette::generate_palette;
use crate::services::ExportService;

/// Export a generated palette as Tailwind, CSS, SCSS or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    /// Output flavor (defaults to the configured target)
    #[arg(short, long, value_enum, value_name = "TARGET")]
    pub target: Option<ExportTarget>,

    /// Color notation (defaults to the configured format)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ColorFormat>,

    /// Palette title used in headers and the file name
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_PALETTE_TITLE)]
    pub title: String,

    /// Output file path (defaults to <title>-palette.<ext> in the export directory)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the code instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let request = self.palette.to_request(&config.generator)?;
        let target = self.target.unwrap_or(config.export.target);
        let format = self.format.unwrap_or(config.export.format);

        let generated = generate_palette(&request);
        let code = export_palette(&generated.palette, &self.title, target, format);

        if self.stdout {
            println!("{code}");
            return Ok(());
        }

        let path = self.output.clone().unwrap_or_else(|| {
            let file_name = export_file_name(&self.title, target);
            config
                .export
                .output_dir
                .as_ref()
                .map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
        });

        ExportService::save(&code, &path)
            .map_err(|e| CliError::io(format!("Failed to write export: {e:#}")))?;
        info!(path = %path.display(), %target, %format, "exported palette");

        println!("✓ Exported {target} ({format}) to {}", path.display());
        Ok(())
    }
}
