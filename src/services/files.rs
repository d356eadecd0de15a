//! File I/O for gallery dumps and exported palette code.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::SavedPalette;

/// Writes `content` to `path` through a sibling temp file and a rename, so a
/// failed write never leaves a truncated file.
fn write_atomic(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .context("Output path has no file name")?
        .to_string_lossy();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })
}

/// Loads gallery rows from JSON files.
pub struct GalleryService;

/// Accepted on-disk shapes: a bare array of rows, or `{ "palettes": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GalleryFile {
    Rows(Vec<SavedPalette>),
    Wrapped { palettes: Vec<SavedPalette> },
}

impl GalleryService {
    /// Parses gallery rows from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or rows are missing
    /// required fields.
    pub fn parse(json: &str) -> Result<Vec<SavedPalette>> {
        let file: GalleryFile =
            serde_json::from_str(json).context("Failed to parse gallery JSON")?;

        Ok(match file {
            GalleryFile::Rows(rows) | GalleryFile::Wrapped { palettes: rows } => rows,
        })
    }

    /// Loads gallery rows from a JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use palettesmith::services::GalleryService;
    ///
    /// let rows = GalleryService::load(Path::new("palettes.json"))?;
    /// println!("{} palettes", rows.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Vec<SavedPalette>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read gallery file {}", path.display()))?;
        let rows = Self::parse(&content)
            .with_context(|| format!("Failed to load gallery from {}", path.display()))?;
        debug!(count = rows.len(), path = %path.display(), "loaded gallery rows");
        Ok(rows)
    }

    /// Loads gallery rows, treating a missing file as an empty gallery.
    pub fn load_or_empty(path: &Path) -> Result<Vec<SavedPalette>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Vec::new())
        }
    }

    /// Appends `row` to the gallery file at `path`, creating it if needed.
    ///
    /// The file is rewritten as a bare JSON array.
    pub fn append(row: SavedPalette, path: &Path) -> Result<Vec<SavedPalette>> {
        let mut rows = Self::load_or_empty(path)?;
        rows.push(row);

        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize gallery")?;
        write_atomic(&json, path)?;

        debug!(count = rows.len(), path = %path.display(), "saved gallery rows");
        Ok(rows)
    }
}

/// Writes exported palette code to disk.
pub struct ExportService;

impl ExportService {
    /// Writes `content` to `path` atomically.
    pub fn save(content: &str, path: &Path) -> Result<()> {
        write_atomic(content, path)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote export");
        Ok(())
    }
}
