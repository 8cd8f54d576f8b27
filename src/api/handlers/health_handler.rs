//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::api::AppState;
use crate::errors::AppResult;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub users: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - reports the size of the user store.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let users = state.user_service.count_users().await?;
    Ok(Json(HealthResponse {
        status: "healthy",
        users,
    }))
}
