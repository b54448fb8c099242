//! HTTP routes.
//!
//! The repository's rendition of the configuration import/export/edit
//! surface. Import and update bodies are raw TOML text; export returns the
//! last accepted text verbatim as `text/plain`.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::app::App;
use crate::stores::registry::SKILLS_CONFIG_KEY;
use crate::use_cases::ConfigError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/config", put(update_config))
        .route("/api/config/export", get(export_config))
        .route("/api/config/import", post(import_config))
        .route("/api/config/reset", post(reset_config))
        .route("/api/config/schema", get(get_schema))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Serialize)]
struct ImportResponse {
    imported: bool,
}

#[derive(Serialize)]
struct UpdateResponse {
    updated: bool,
}

async fn export_config(
    State(app): State<Arc<App>>,
) -> Result<impl IntoResponse, ApiError> {
    let text = app
        .config
        .export_current()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or(ApiError::NotFound)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

async fn import_config(
    State(app): State<Arc<App>>,
    body: String,
) -> Result<Json<ImportResponse>, ApiError> {
    match app.config.import_from_text(&body).await {
        Ok(imported) => Ok(Json(ImportResponse { imported })),
        Err(e @ (ConfigError::Syntax(_) | ConfigError::Invalid(_))) => {
            Err(ApiError::BadRequest(e.to_string()))
        }
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

async fn update_config(
    State(app): State<Arc<App>>,
    body: String,
) -> Json<UpdateResponse> {
    let updated = app.config.update_from_text(&body).await;
    Json(UpdateResponse { updated })
}

async fn reset_config(State(app): State<Arc<App>>) -> StatusCode {
    app.config.reset_to_default().await;
    StatusCode::NO_CONTENT
}

async fn get_schema(
    State(app): State<Arc<App>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    app.registry
        .get(SKILLS_CONFIG_KEY)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
