//! Palettesmith - color palette generator
//!
//! Derives harmonious companion colors from a seed, builds ten-step shade
//! ramps and exports them as Tailwind, CSS, SCSS or JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use palettesmith::cli::{
    ConfigArgs, ContrastArgs, ConvertArgs, ExitCode, ExportArgs, GalleryArgs, GenerateArgs,
    HarmonyArgs, SaveArgs, ShareArgs, ValidateArgs,
};
use palettesmith::constants::APP_BINARY_NAME;

/// Palettesmith - color palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate shade ramps from a seed color
    Generate(GenerateArgs),
    /// Show a color as hex, RGB and HSL
    Convert(ConvertArgs),
    /// Grade the WCAG contrast of two colors
    Contrast(ContrastArgs),
    /// Check hex color syntax
    Validate(ValidateArgs),
    /// Derive harmony companions of a seed color
    Harmony(HarmonyArgs),
    /// Export a palette as code
    Export(ExportArgs),
    /// Browse saved palettes from a JSON file
    Gallery(GalleryArgs),
    /// Save a generated palette to a gallery file
    Save(SaveArgs),
    /// Create and open palette share links
    Share(ShareArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> palettesmith::cli::CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Gallery(args) => args.execute(),
            Self::Save(args) => args.execute(),
            Self::Share(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    std::process::exit(code.code());
}
