use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::{LeadRequest, LeadResponse};
use crate::store::SupabaseStore;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Lead store client. `None` when Supabase credentials are absent; the
    /// validate endpoint reports the misconfiguration per request instead of
    /// refusing to boot.
    pub store: Option<SupabaseStore>,
}

/// Builds the application router. Kept in the library so integration tests
/// can drive the exact routes the server mounts.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/validate", post(validate_lead))
        .with_state(state)
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "wodah-leads-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/validate
///
/// Validates and persists one email/niche lead pair.
///
/// Contract:
/// - store unconfigured -> 500 "Supabase not configured"
/// - missing/empty email or nicheId -> 400, no store write
/// - store write failure -> 500 "Failed to save lead" (cause logged)
/// - unreadable body -> 500 "Internal server error"
/// - success -> 200 `{ "success": true, "data": <inserted row> }`
pub async fn validate_lead(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<Json<LeadResponse>, AppError> {
    let store = state
        .store
        .as_ref()
        .ok_or_else(|| AppError::Configuration("Supabase URL or anon key missing".to_string()))?;

    // The original endpoint's catch-all: a body that cannot be read as JSON
    // is an internal error, not a 400.
    let Json(request) = body
        .map_err(|e| AppError::InternalError(format!("Failed to read request body: {}", e)))?;

    if request.email.trim().is_empty() || request.niche_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Email and nicheId are required".to_string(),
        ));
    }

    tracing::info!(
        "POST /api/validate - niche: {}, email: {}",
        request.niche_id,
        request.email
    );

    let data = store
        .insert_lead(&request.email, &request.niche_id)
        .await
        .context("inserting lead")?;

    Ok(Json(LeadResponse {
        success: true,
        data,
    }))
}
