//! Palette generation command.

use clap::Args;
use tracing::debug;

use crate::cli::common::{print_json, CliError, CliResult, PaletteArgs};
use crate::config::Config;
use crate::models::PaletteRole;
use crate::services::palette::generate_palette;
use crate::services::PaletteReport;

/// Generate shade ramps from a seed color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let request = self.palette.to_request(&config.generator)?;
        debug!(?request, "generating palette");

        let generated = generate_palette(&request);
        let report = PaletteReport::new(&request, &generated);

        if self.json {
            return print_json(&report);
        }

        match request.harmony {
            Some(mode) => println!("Seed {} ({mode} harmony, {})", report.seed, request.strategy),
            None => println!("Seed {} (manual, {})", report.seed, request.strategy),
        }

        for (index, role) in PaletteRole::ALL.into_iter().enumerate() {
            let Some(base) = generated.base[index] else {
                continue;
            };
            println!("\n{} ({base})", capitalize(role.as_str()));
            for shade in generated.palette.ramp(role) {
                let marker = if shade.color.is_light() { "light" } else { "dark" };
                println!("  {:>3}  {}  {marker}", shade.level, shade.hex());
            }
        }

        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
