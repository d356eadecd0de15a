//! Harmony derivation command.

use clap::Args;

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::services::HarmonyReport;
use crate::theory::HarmonyMode;

/// Derive the two companion colors of a seed
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Seed color
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Harmony mode (complementary, analogous or triadic)
    #[arg(short, long, value_name = "MODE", default_value_t = HarmonyMode::Complementary)]
    pub mode: HarmonyMode,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let report = HarmonyReport::new(parse_color(&self.seed)?, self.mode);

        if self.json {
            return print_json(&report);
        }

        println!("{} harmony: {}", report.mode, report.description);
        for (label, color) in [
            ("Primary", &report.primary),
            ("Secondary", &report.secondary),
            ("Tertiary", &report.tertiary),
        ] {
            println!("  {label:<10} {}  {}", color.hex, color.css_hsl);
        }

        Ok(())
    }
}
