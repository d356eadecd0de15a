//! Color conversion command.

use clap::Args;

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::services::ColorReport;

/// Show a color as hex, RGB and HSL with its brightness
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color to convert (e.g., "#d5d86e", "d5d86e" or "#abc")
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let report = ColorReport::new(parse_color(&self.color)?);

        if self.json {
            return print_json(&report);
        }

        println!("Hex:        {}", report.hex);
        println!("RGB:        {}", report.css_rgb);
        println!("HSL:        {}", report.css_hsl);
        println!("Brightness: {:.1}", report.brightness);
        println!(
            "Tone:       {}",
            if report.is_light { "light" } else { "dark" }
        );
        println!("Text color: {}", report.contrast_color);

        Ok(())
    }
}
