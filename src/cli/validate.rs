//! Hex color validation command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::theory::validate_hex_color;

/// Check that colors are `#RGB` or `#RRGGBB`
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Colors to check
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ValidationEntry<'a> {
    input: &'a str,
    valid: bool,
}

#[derive(Serialize, Debug)]
struct ValidationResponse<'a> {
    valid: bool,
    results: Vec<ValidationEntry<'a>>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let results: Vec<_> = self
            .colors
            .iter()
            .map(|input| ValidationEntry {
                input,
                valid: validate_hex_color(input),
            })
            .collect();
        let invalid = results.iter().filter(|entry| !entry.valid).count();

        let response = ValidationResponse {
            valid: invalid == 0,
            results,
        };

        if self.json {
            print_json(&response)?;
        } else {
            for entry in &response.results {
                let prefix = if entry.valid { "✓" } else { "✗" };
                println!("{prefix} {}", entry.input);
            }
        }

        if !response.valid {
            return Err(CliError::validation(format!(
                "{invalid} of {} colors are invalid",
                response.results.len()
            )));
        }

        Ok(())
    }
}
