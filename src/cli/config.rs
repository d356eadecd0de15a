//! Configuration management CLI commands.

use crate::cli::common::{parse_color, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{ColorFormat, ExportTarget};
use crate::theory::{HarmonyMode, RampStrategy};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default harmony mode
    #[arg(long, value_name = "MODE")]
    mode: Option<HarmonyMode>,

    /// Default ramp strategy
    #[arg(long, value_name = "STRATEGY")]
    strategy: Option<RampStrategy>,

    /// Default export target
    #[arg(long, value_enum, value_name = "TARGET")]
    target: Option<ExportTarget>,

    /// Default export color format
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ColorFormat>,

    /// Default seed color
    #[arg(long, value_name = "HEX")]
    seed: Option<String>,

    /// Directory exports are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Web server host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.strategy.is_none()
            && self.target.is_none()
            && self.format.is_none()
            && self.seed.is_none()
            && self.output_dir.is_none()
            && self.port.is_none()
            && self.host.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --mode, --strategy, --target, --format, --seed, --output-dir, --port, or --host",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(mode) = self.mode {
            config.generator.harmony_mode = mode;
        }
        if let Some(strategy) = self.strategy {
            config.generator.ramp_strategy = strategy;
        }
        if let Some(target) = self.target {
            config.export.target = target;
        }
        if let Some(format) = self.format {
            config.export.format = format;
        }
        if let Some(seed) = &self.seed {
            config.generator.default_seed = parse_color(seed)?.to_hex();
        }
        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.export.output_dir = Some(path.clone());
        }
        if let Some(port) = self.port {
            if port == 0 {
                return Err(CliError::validation("Port must be non-zero"));
            }
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;
        info!("configuration updated");

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("==========================");
    println!();

    println!("Generator:");
    println!("  Harmony Mode:  {}", config.generator.harmony_mode);
    println!("  Ramp Strategy: {}", config.generator.ramp_strategy);
    println!("  Default Seed:  {}", config.generator.default_seed);
    println!("  Secondary:     {}", on_off(config.generator.include_secondary));
    println!("  Tertiary:      {}", on_off(config.generator.include_tertiary));
    println!();

    println!("Export:");
    println!("  Target: {}", config.export.target);
    println!("  Format: {}", config.export.format);
    match &config.export.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
    println!();

    println!("Server:");
    println!("  Address: {}", config.server.bind_addr());
    println!();
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
