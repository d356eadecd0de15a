//! Share link commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::cli::common::{print_json, CliError, CliResult, PaletteArgs};
use crate::config::Config;
use crate::constants::DEFAULT_PALETTE_TITLE;
use crate::models::PaletteRole;
use crate::services::palette::generate_palette;
use crate::services::{parse_share_payload, share_link, SharedPaletteReport};

/// Create and open palette share links
#[derive(Args, Debug, Clone)]
pub struct ShareArgs {
    #[command(subcommand)]
    command: ShareCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ShareCommand {
    /// Generate a palette and print a link that carries it
    Link(ShareLinkArgs),
    /// Read the palette back out of a share link
    Open(ShareOpenArgs),
}

/// Generate a palette and print a link that carries it
#[derive(Args, Debug, Clone)]
pub struct ShareLinkArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    /// Palette title stored in the link
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_PALETTE_TITLE)]
    title: String,

    /// Link origin (defaults to the configured web server address)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Read the palette back out of a share link
#[derive(Args, Debug, Clone)]
pub struct ShareOpenArgs {
    /// Share link, its `palette` query value, or the raw JSON document
    #[arg(value_name = "LINK")]
    link: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ShareLinkResponse<'a> {
    title: &'a str,
    link: String,
}

impl ShareArgs {
    /// Execute share subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ShareCommand::Link(args) => args.execute(),
            ShareCommand::Open(args) => args.execute(),
        }
    }
}

impl ShareLinkArgs {
    /// Execute link command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let request = self.palette.to_request(&config.generator)?;
        let generated = generate_palette(&request);

        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| config.server.base_url());
        let link = share_link(&base_url, &self.title, &generated.palette)
            .map_err(|e| CliError::io(format!("Failed to encode share link: {e}")))?;
        debug!(bytes = link.len(), "built share link");

        if self.json {
            return print_json(&ShareLinkResponse {
                title: &self.title,
                link,
            });
        }

        println!("{link}");
        Ok(())
    }
}

impl ShareOpenArgs {
    /// Execute open command
    pub fn execute(&self) -> CliResult<()> {
        let shared = parse_share_payload(&self.link)
            .map_err(|e| CliError::validation(format!("Invalid share link: {e}")))?;

        if self.json {
            return print_json(&SharedPaletteReport::from(&shared));
        }

        println!("{}", shared.title);
        for (role, shades) in shared.palette.ramps() {
            let hexes: Vec<String> = shades.iter().map(|shade| shade.hex()).collect();
            println!("  {:<9} {}", role.as_str(), hexes.join(" "));
        }
        if shared.palette.ramp(PaletteRole::Primary).is_empty() {
            println!("  (no primary ramp)");
        }

        Ok(())
    }
}
