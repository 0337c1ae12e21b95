//! Page handlers - session creation and page changes.

use artsel_engine::{RenderView, Resolution, Session};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::AppState;

/// Largest page the catalog will serve.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request body for creating a session.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Page size to start with (server default if absent)
    #[serde(default)]
    pub page_size: Option<u64>,
}

/// Response for session creation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
    /// View after the first page loaded
    pub view: RenderView,
}

/// Request body for a page change from the pager.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChangeRequest {
    /// Index of the first record on the page (0-based)
    pub offset: u64,
    pub page_size: u64,
}

fn check_page_size(page_size: u64) -> Result<()> {
    if page_size > MAX_PAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "pageSize must be at most {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// Create a session and load its first page.
pub async fn handle_create_session(
    state: &AppState,
    request: CreateSessionRequest,
) -> Result<CreateSessionResponse> {
    let page_size = request
        .page_size
        .unwrap_or(state.config.default_page_size);
    check_page_size(page_size)?;

    let session_id = state.sessions.create(Session::new(page_size)?);
    let view = handle_page_change(
        state,
        &session_id,
        PageChangeRequest {
            offset: 0,
            page_size,
        },
    )
    .await?;

    Ok(CreateSessionResponse { session_id, view })
}

/// Load the requested page into a session.
///
/// The session is only locked to issue the request and to resolve it; the
/// catalog fetch runs unlocked, so overlapping page changes for one session
/// are possible. The most recently issued one wins; a response that lost the
/// race returns the session's current view.
pub async fn handle_page_change(
    state: &AppState,
    session_id: &str,
    request: PageChangeRequest,
) -> Result<RenderView> {
    check_page_size(request.page_size)?;

    let page_request = state
        .sessions
        .with_session(session_id, |session| {
            session.change_page(request.offset, request.page_size)
        })
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))??;

    tracing::debug!(
        session_id = %session_id,
        seq = page_request.seq,
        page = page_request.page_number,
        limit = page_request.page_size,
        "Fetching catalog page"
    );

    let outcome = state
        .catalog
        .fetch_page(page_request.page_number, page_request.page_size)
        .await;

    let (resolution, view) = state
        .sessions
        .with_session(session_id, |session| {
            let resolution = session.resolve_page(page_request.seq, outcome);
            (resolution, session.view())
        })
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;

    match resolution {
        Resolution::Applied => {
            tracing::debug!(
                session_id = %session_id,
                seq = page_request.seq,
                items = view.items.len(),
                total = view.total_count,
                "Page loaded"
            );
        }
        Resolution::Stale => {
            tracing::debug!(
                session_id = %session_id,
                seq = page_request.seq,
                "Discarded response for superseded page request"
            );
        }
        Resolution::Failed(e) => {
            tracing::error!(
                session_id = %session_id,
                page = page_request.page_number,
                "Error fetching artworks: {}",
                e
            );
        }
    }

    Ok(view)
}

/// Current view of a session.
pub fn handle_get_view(state: &AppState, session_id: &str) -> Result<RenderView> {
    state
        .sessions
        .with_session(session_id, |session| session.view())
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))
}
