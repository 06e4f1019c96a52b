//! Web API module for ButtonVerse.
//!
//! This module provides a REST API over the style library so a browser frontend
//! can browse, search, copy and generate button styles.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/styles` - List styles (optional ?category= and ?search=)
//! - `GET /api/styles/{id}` - Get a single style
//! - `GET /api/styles/{id}/snippet` - Get the JSX snippet for a style
//! - `GET /api/categories` - List categories with style counts
//! - `POST /api/generate` - Generate a new style from a prompt

use std::net::SocketAddr;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::branding::APP_DISPLAY_NAME;
use crate::catalog::Library;
use crate::config::Config;
use crate::generator::{GeminiGenerator, StyleGenerator};
use crate::models::{CategoryFilter, StyleRecord};
use crate::snippet::{jsx_snippet, label};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Style library; generated styles are appended under the write lock
    library: Arc<RwLock<Library>>,
    /// Style generator, absent when no API key is configured
    generator: Option<Arc<dyn StyleGenerator>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(library: Library, generator: Option<Arc<dyn StyleGenerator>>) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
            generator,
        }
    }

    /// Builds the library and generator from configuration.
    ///
    /// A missing API key disables generation instead of failing.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let library = Library::load(config)?;

        let generator: Option<Arc<dyn StyleGenerator>> =
            match GeminiGenerator::from_config(&config.generator) {
                Ok(generator) => {
                    info!("AI generation enabled (model {})", generator.model());
                    Some(Arc::new(generator))
                }
                Err(e) => {
                    warn!("AI generation disabled: {e:#}");
                    None
                }
            };

        Ok(Self::new(library, generator))
    }

    fn read_library(&self) -> ApiResult<RwLockReadGuard<'_, Library>> {
        self.library.read().map_err(|_| lock_error())
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// API version.
    pub version: String,
    /// Number of styles in the library.
    pub styles: usize,
    /// Whether AI generation is available.
    pub generator: bool,
}

/// Query parameters for style listing.
#[derive(Debug, Deserialize)]
pub struct StyleQuery {
    /// Category id or name; "all" or absent for every category.
    pub category: Option<String>,
    /// Case-insensitive search text.
    pub search: Option<String>,
}

/// Style list response.
#[derive(Debug, Serialize)]
pub struct StyleListResponse {
    /// Matching styles in library order.
    pub styles: Vec<StyleRecord>,
    /// Number of matching styles.
    pub total: usize,
}

/// JSX snippet response.
#[derive(Debug, Serialize)]
pub struct SnippetResponse {
    /// Style id.
    pub id: String,
    /// Preview label.
    pub label: String,
    /// Copyable JSX.
    pub jsx: String,
}

/// Category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Categories in navigation order.
    pub categories: Vec<CategoryInfo>,
}

/// Category info with style count.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of styles in the category.
    pub count: usize,
}

/// Style generation request.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Description of the desired button.
    pub prompt: String,
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

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn lock_error() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("Style library is unavailable")),
    )
}

fn not_found(id: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Style not found: {id}"))),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let styles = state.read_library()?.len();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        styles,
        generator: state.generator.is_some(),
    }))
}

/// GET /api/styles - List styles matching category and search text.
async fn list_styles(
    State(state): State<AppState>,
    Query(query): Query<StyleQuery>,
) -> ApiResult<Json<StyleListResponse>> {
    let category: CategoryFilter = query
        .category
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e: anyhow::Error| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details("Invalid category", e.to_string())),
            )
        })?;

    let library = state.read_library()?;
    let styles: Vec<StyleRecord> = library
        .filter(category, query.search.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    let total = styles.len();
    Ok(Json(StyleListResponse { styles, total }))
}

/// GET /api/styles/{id} - Get a single style.
async fn get_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StyleRecord>> {
    let library = state.read_library()?;
    let style = library.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(style.clone()))
}

/// GET /api/styles/{id}/snippet - Get the JSX snippet for a style.
async fn get_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SnippetResponse>> {
    let library = state.read_library()?;
    let style = library.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(SnippetResponse {
        id: style.id.clone(),
        label: label(style),
        jsx: jsx_snippet(style),
    }))
}

/// GET /api/categories - List categories with style counts.
async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoryListResponse>> {
    let categories = state
        .read_library()?
        .category_counts()
        .into_iter()
        .map(|(category, count)| CategoryInfo {
            id: category.id().to_string(),
            name: category.display_name().to_string(),
            count,
        })
        .collect();

    Ok(Json(CategoryListResponse { categories }))
}

/// POST /api/generate - Generate a style and append it to the library.
async fn generate_style(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<(StatusCode, Json<StyleRecord>)> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Prompt must not be empty")),
        ));
    }

    let generator = state.generator.as_ref().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::with_details(
                "AI generation is not configured",
                "Set generator.api_key in config.toml or the GEMINI_API_KEY environment variable",
            )),
        )
    })?;

    // The library lock is only taken after the generator call completes
    let style = generator.generate(prompt).await.ok_or_else(|| {
        (
            StatusCode::BAD_GATEWAY,
            Json(ApiError::new("Style generation failed")),
        )
    })?;

    state
        .library
        .write()
        .map_err(|_| lock_error())?
        .append(style.clone());

    Ok((StatusCode::CREATED, Json(style)))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server runs locally next to the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Style endpoints
        .route("/api/styles", get(list_styles))
        .route("/api/styles/{id}", get(get_style))
        .route("/api/styles/{id}/snippet", get(get_snippet))
        .route("/api/categories", get(list_categories))
        .route("/api/generate", post(generate_style))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the library cannot be built or the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    info!("Starting {APP_DISPLAY_NAME} web server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
