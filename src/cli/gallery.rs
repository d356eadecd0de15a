//! Gallery browsing command over a local JSON dump.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::gallery::DEFAULT_GALLERY_LIMIT;
use crate::models::{BrightnessFilter, GalleryQuery, SavedPalette, SortOrder};
use crate::services::GalleryService;

/// Search, filter and sort saved palettes
#[derive(Debug, Clone, Args)]
pub struct GalleryArgs {
    /// JSON file holding gallery rows
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Case-insensitive name search
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Brightness bucket (all, light or dark)
    #[arg(long, value_name = "FILTER", default_value_t = BrightnessFilter::All)]
    pub filter: BrightnessFilter,

    /// Ordering (recent or popular)
    #[arg(long, value_name = "ORDER", default_value_t = SortOrder::Recent)]
    pub sort: SortOrder,

    /// Maximum number of rows
    #[arg(long, value_name = "N", default_value_t = DEFAULT_GALLERY_LIMIT)]
    pub limit: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct GalleryResponse<'a> {
    /// Rows in the file
    total: usize,
    /// Rows passing the filters, before the limit
    matched: usize,
    /// Rows shown, at most `limit`
    palettes: Vec<&'a SavedPalette>,
}

impl GalleryArgs {
    /// Execute the gallery command
    pub fn execute(&self) -> CliResult<()> {
        let rows = GalleryService::load(&self.file)
            .map_err(|e| CliError::io(format!("Failed to load gallery: {e:#}")))?;

        let query = GalleryQuery {
            search: self.search.clone(),
            brightness: self.filter,
            sort: self.sort,
            limit: self.limit,
        };
        let mut palettes = query.matching(&rows);
        let matched = palettes.len();
        palettes.truncate(query.limit);

        if self.json {
            return print_json(&GalleryResponse {
                total: rows.len(),
                matched,
                palettes,
            });
        }

        if palettes.is_empty() {
            println!("No palettes match.");
            return Ok(());
        }

        for palette in &palettes {
            let tone = match palette.average_brightness() {
                Some(avg) if avg > 128.0 => "light",
                Some(_) => "dark",
                None => "-",
            };
            println!(
                "{:<24} {:>4} likes {:>4} copies  {:<5}  {}",
                palette.name,
                palette.likes,
                palette.copied_count,
                tone,
                palette.colors.join(" ")
            );
        }
        println!(
            "\n{} shown, {matched} of {} palettes match",
            palettes.len(),
            rows.len()
        );

        Ok(())
    }
}
