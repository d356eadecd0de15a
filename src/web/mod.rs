//! Web API module for Palettesmith.
//!
//! This module provides a local REST API over the color engine so a browser
//! frontend can generate, inspect and export palettes.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/palettes` - Generate a palette
//! - `GET /api/colors/{hex}` - Describe a color (hex without `#`)
//! - `GET /api/harmony/{hex}` - Harmony companions (optional ?mode=)
//! - `POST /api/export` - Render a palette as code
//! - `POST /api/gallery/query` - Filter and sort gallery rows
//! - `POST /api/gallery/entries` - Build a gallery row from a generated palette
//! - `POST /api/share` - Build a share link for a generated palette
//! - `POST /api/share/open` - Read a palette back out of a share link
//! - `GET /api/config` - Get current configuration

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::{Config, GeneratorConfig};
use crate::constants::DEFAULT_PALETTE_TITLE;
use crate::export::{export_file_name, export_palette, ColorFormat, ExportTarget};
use crate::models::{
    BrightnessFilter, ColorError, GalleryQuery, RgbColor, SavedPalette, SortOrder,
};
use crate::models::gallery::DEFAULT_GALLERY_LIMIT;
use crate::services::palette::{generate_palette, PaletteRequest};
use crate::services::{
    parse_share_payload, share_link, share_payload, ColorReport, HarmonyReport, PaletteReport,
    SharedPaletteReport,
};
use crate::theory::{HarmonyMode, RampStrategy};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Palette generation request.
///
/// Omitted fields fall back to the server's generator configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteBody {
    /// Seed color (e.g., "#d5d86e").
    pub seed: Option<String>,
    /// Harmony mode.
    pub mode: Option<HarmonyMode>,
    /// Pick companion colors manually.
    #[serde(default)]
    pub manual: bool,
    /// Manual secondary color (implies manual mode).
    pub secondary: Option<String>,
    /// Manual tertiary color (implies manual mode).
    pub tertiary: Option<String>,
    /// Generate the secondary ramp.
    pub include_secondary: Option<bool>,
    /// Generate the tertiary ramp.
    pub include_tertiary: Option<bool>,
    /// Ramp algorithm.
    pub strategy: Option<RampStrategy>,
}

impl PaletteBody {
    fn to_request(&self, defaults: &GeneratorConfig) -> Result<PaletteRequest, ApiError> {
        let seed = match &self.seed {
            Some(seed) => parse_color(seed)?,
            None => defaults
                .seed()
                .map_err(|e| ApiError::with_details("Invalid default seed", format!("{e:#}")))?,
        };

        let mut request = defaults.request(seed);
        if let Some(mode) = self.mode {
            request.harmony = Some(mode);
        }
        if self.manual || self.secondary.is_some() || self.tertiary.is_some() {
            request.harmony = None;
        }
        request.secondary = self.secondary.as_deref().map(parse_color).transpose()?;
        request.tertiary = self.tertiary.as_deref().map(parse_color).transpose()?;
        if let Some(include) = self.include_secondary {
            request.include_secondary = include;
        }
        if let Some(include) = self.include_tertiary {
            request.include_tertiary = include;
        }
        if let Some(strategy) = self.strategy {
            request.strategy = strategy;
        }

        Ok(request)
    }
}

/// Query parameters for the harmony endpoint.
#[derive(Debug, Deserialize)]
pub struct HarmonyQuery {
    /// Harmony mode; defaults to the configured mode.
    pub mode: Option<HarmonyMode>,
}

/// Export request: palette fields plus output settings.
#[derive(Debug, Deserialize)]
pub struct ExportBody {
    /// Palette to generate.
    #[serde(flatten)]
    pub palette: PaletteBody,
    /// Output flavor.
    pub target: Option<ExportTarget>,
    /// Color notation.
    pub format: Option<ColorFormat>,
    /// Palette title.
    pub title: Option<String>,
}

/// Export response.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Suggested file name.
    pub filename: String,
    /// Output flavor used.
    pub target: ExportTarget,
    /// Color notation used.
    pub format: ColorFormat,
    /// Rendered code.
    pub content: String,
}

/// Gallery query request.
#[derive(Debug, Deserialize)]
pub struct GalleryBody {
    /// Rows to query.
    pub palettes: Vec<SavedPalette>,
    /// Case-insensitive name search.
    #[serde(default)]
    pub search: String,
    /// Brightness bucket.
    #[serde(default)]
    pub filter: BrightnessFilter,
    /// Ordering.
    #[serde(default)]
    pub sort: SortOrder,
    /// Maximum number of rows.
    pub limit: Option<usize>,
}

/// Gallery query response.
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    /// Number of rows received.
    pub total: usize,
    /// Number of rows passing the filters, before the limit.
    pub matched: usize,
    /// Matching rows in display order, at most `limit`.
    pub palettes: Vec<SavedPalette>,
}

/// Gallery save request: palette fields plus the row name.
#[derive(Debug, Deserialize)]
pub struct SaveBody {
    /// Palette to generate.
    #[serde(flatten)]
    pub palette: PaletteBody,
    /// Palette name; blank names become "Untitled Palette".
    #[serde(default)]
    pub name: String,
}

/// Share link request: palette fields plus link settings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareBody {
    /// Palette to generate.
    #[serde(flatten)]
    pub palette: PaletteBody,
    /// Title stored in the link.
    pub title: Option<String>,
    /// Link origin; defaults to the server's own address.
    pub base_url: Option<String>,
}

/// Share link response.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Title stored in the link.
    pub title: String,
    /// Full link.
    pub link: String,
    /// Percent-encoded `palette` query value.
    pub payload: String,
}

/// Request to open a share link.
#[derive(Debug, Deserialize)]
pub struct ShareOpenBody {
    /// Full link, query value or raw JSON document.
    pub link: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl From<ColorError> for ApiError {
    fn from(err: ColorError) -> Self {
        Self::new(err.to_string())
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(err: ApiError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(err))
}

fn parse_color(input: &str) -> Result<RgbColor, ApiError> {
    Ok(RgbColor::from_hex_lenient(input)?)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/palettes - Generate a palette.
async fn create_palette(
    State(state): State<AppState>,
    Json(body): Json<PaletteBody>,
) -> ApiResult<PaletteReport> {
    let request = body
        .to_request(&state.config.generator)
        .map_err(bad_request)?;
    debug!(?request, "generating palette");

    let generated = generate_palette(&request);
    Ok(Json(PaletteReport::new(&request, &generated)))
}

/// GET /api/colors/{hex} - Describe a single color.
async fn get_color(Path(hex): Path<String>) -> ApiResult<ColorReport> {
    let color = parse_color(&hex).map_err(bad_request)?;
    Ok(Json(ColorReport::new(color)))
}

/// GET /api/harmony/{hex} - Harmony companions of a color.
async fn get_harmony(
    State(state): State<AppState>,
    Path(hex): Path<String>,
    Query(query): Query<HarmonyQuery>,
) -> ApiResult<HarmonyReport> {
    let color = parse_color(&hex).map_err(bad_request)?;
    let mode = query.mode.unwrap_or(state.config.generator.harmony_mode);
    Ok(Json(HarmonyReport::new(color, mode)))
}

/// POST /api/export - Generate a palette and render it as code.
async fn export(
    State(state): State<AppState>,
    Json(body): Json<ExportBody>,
) -> ApiResult<ExportResponse> {
    let request = body
        .palette
        .to_request(&state.config.generator)
        .map_err(bad_request)?;
    let target = body.target.unwrap_or(state.config.export.target);
    let format = body.format.unwrap_or(state.config.export.format);
    let title = body.title.as_deref().unwrap_or(DEFAULT_PALETTE_TITLE);

    let generated = generate_palette(&request);
    let content = export_palette(&generated.palette, title, target, format);

    Ok(Json(ExportResponse {
        filename: export_file_name(title, target),
        target,
        format,
        content,
    }))
}

/// POST /api/gallery/query - Filter and sort gallery rows.
async fn query_gallery(Json(body): Json<GalleryBody>) -> Json<GalleryResponse> {
    let query = GalleryQuery {
        search: body.search,
        brightness: body.filter,
        sort: body.sort,
        limit: body.limit.unwrap_or(DEFAULT_GALLERY_LIMIT),
    };
    let matching = query.matching(&body.palettes);
    let matched = matching.len();
    let palettes: Vec<SavedPalette> = matching.into_iter().take(query.limit).cloned().collect();

    Json(GalleryResponse {
        total: body.palettes.len(),
        matched,
        palettes,
    })
}

/// POST /api/gallery/entries - Build a gallery row from a generated palette.
///
/// The row is returned, not stored; persistence belongs to the caller.
async fn create_gallery_entry(
    State(state): State<AppState>,
    Json(body): Json<SaveBody>,
) -> ApiResult<SavedPalette> {
    let request = body
        .palette
        .to_request(&state.config.generator)
        .map_err(bad_request)?;
    let generated = generate_palette(&request);

    let row = SavedPalette::from_palette(&body.name, &generated.palette);
    debug!(id = %row.id, name = %row.name, "built gallery row");
    Ok(Json(row))
}

/// POST /api/share - Build a share link for a generated palette.
async fn create_share_link(
    State(state): State<AppState>,
    Json(body): Json<ShareBody>,
) -> ApiResult<ShareResponse> {
    let request = body
        .palette
        .to_request(&state.config.generator)
        .map_err(bad_request)?;
    let generated = generate_palette(&request);

    let title = body
        .title
        .unwrap_or_else(|| DEFAULT_PALETTE_TITLE.to_string());
    let base_url = body
        .base_url
        .unwrap_or_else(|| state.config.server.base_url());
    let encode_error = |e: crate::services::ShareError| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to encode share link", e.to_string())),
        )
    };
    let payload = share_payload(&title, &generated.palette).map_err(encode_error)?;
    let link = share_link(&base_url, &title, &generated.palette).map_err(encode_error)?;

    Ok(Json(ShareResponse {
        title,
        link,
        payload,
    }))
}

/// POST /api/share/open - Read a palette back out of a share link.
async fn open_share_link(Json(body): Json<ShareOpenBody>) -> ApiResult<SharedPaletteReport> {
    let shared = parse_share_payload(&body.link).map_err(|e| {
        bad_request(ApiError::with_details("Invalid share link", e.to_string()))
    })?;
    Ok(Json(SharedPaletteReport::from(&shared)))
}

/// GET /api/config - Get current configuration.
async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.config.as_ref().clone())
}

// ============================================================================
// Router
// ============================================================================

/// Builds the API router.
pub fn create_router(state: AppState) -> Router {
    // The server is meant to run on the user's machine next to the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/palettes", post(create_palette))
        .route("/api/colors/{hex}", get(get_color))
        .route("/api/harmony/{hex}", get(get_harmony))
        .route("/api/export", post(export))
        .route("/api/gallery/query", post(query_gallery))
        .route("/api/gallery/entries", post(create_gallery_entry))
        .route("/api/share", post(create_share_link))
        .route("/api/share/open", post(open_share_link))
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server and serves until the process exits.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting Palettesmith web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
