//! WCAG contrast command.

use clap::Args;

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::services::ContrastReport;

/// Grade the contrast of a foreground color on a background color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground (text) color
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let foreground = parse_color(&self.foreground)?;
        let background = parse_color(&self.background)?;
        let report = ContrastReport::new(foreground, background);

        if self.json {
            return print_json(&report);
        }

        println!(
            "{} on {}: {:.2}:1 ({})",
            report.foreground, report.background, report.ratio, report.level
        );
        println!("  AA:  {}", pass_mark(report.passes_aa));
        println!("  AAA: {}", pass_mark(report.passes_aaa));

        Ok(())
    }
}

const fn pass_mark(passed: bool) -> &'static str {
    if passed {
        "✓ pass"
    } else {
        "✗ fail"
    }
}
