//! Session endpoint routes.

use artsel_engine::RenderView;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::handlers::{
    handle_bulk_target, handle_create_session, handle_get_view, handle_page_change,
    handle_toggle, BulkTargetRequest, CreateSessionRequest, CreateSessionResponse,
    PageChangeRequest, ToggleRequest,
};
use crate::AppState;

/// Create session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_handler))
        .route("/sessions/{id}", get(view_handler).delete(delete_handler))
        .route("/sessions/{id}/page", post(page_handler))
        .route("/sessions/{id}/selection", post(toggle_handler))
        .route("/sessions/{id}/bulk", post(bulk_handler))
}

/// POST /sessions - Start a session and load its first page.
async fn create_handler(
    State(state): State<AppState>,
    request: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<CreateSessionResponse>)> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let response = handle_create_session(&state, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /sessions/{id} - Current view.
async fn view_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderView>> {
    Ok(Json(handle_get_view(&state, &id)?))
}

/// DELETE /sessions/{id} - Drop a session.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}

/// POST /sessions/{id}/page - Page or page-size change.
async fn page_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PageChangeRequest>,
) -> Result<Json<RenderView>> {
    Ok(Json(handle_page_change(&state, &id, request).await?))
}

/// POST /sessions/{id}/selection - Checkbox change on the visible page.
async fn toggle_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<RenderView>> {
    Ok(Json(handle_toggle(&state, &id, request)?))
}

/// POST /sessions/{id}/bulk - Apply a "select first N" target.
async fn bulk_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<BulkTargetRequest>,
) -> Result<Json<RenderView>> {
    Ok(Json(handle_bulk_target(&state, &id, request)?))
}
