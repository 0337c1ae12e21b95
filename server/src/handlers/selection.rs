//! Selection handlers - checkbox changes and the bulk target.

use std::collections::HashSet;

use artsel_engine::{RecordId, RenderView};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::AppState;

/// Request body for a checkbox change on the visible page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    /// Every checked id on the visible page after the change
    pub selected_ids: HashSet<RecordId>,
}

/// Request body for the apply button.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTargetRequest {
    /// Raw contents of the number field
    #[serde(default)]
    pub input: String,
}

/// Fold the visible page's checkbox state into the session's selection.
pub fn handle_toggle(
    state: &AppState,
    session_id: &str,
    request: ToggleRequest,
) -> Result<RenderView> {
    state
        .sessions
        .with_session(session_id, |session| {
            session.toggle(&request.selected_ids);
            session.view()
        })
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))
}

/// Replace the session's selection with a new bulk target.
pub fn handle_bulk_target(
    state: &AppState,
    session_id: &str,
    request: BulkTargetRequest,
) -> Result<RenderView> {
    let view = state
        .sessions
        .with_session(session_id, |session| {
            session.apply_bulk_target(&request.input);
            session.view()
        })
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;

    tracing::debug!(
        session_id = %session_id,
        target = view.target_count,
        "Bulk target applied"
    );

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::FakeCatalog;
    use crate::handlers::{handle_create_session, CreateSessionRequest};
    use crate::test_state;

    async fn session(state: &AppState) -> String {
        handle_create_session(state, CreateSessionRequest::default())
            .await
            .unwrap()
            .session_id
    }

    #[tokio::test]
    async fn toggle_then_bulk_reset() {
        let state = test_state(FakeCatalog::new(100));
        let id = session(&state).await;

        let view = handle_toggle(
            &state,
            &id,
            ToggleRequest {
                selected_ids: [1003, 1005].into_iter().collect(),
            },
        )
        .unwrap();
        assert_eq!(view.selected_ids, vec![1003, 1005]);
        assert_eq!(view.selected_total, 2);

        let view = handle_bulk_target(
            &state,
            &id,
            BulkTargetRequest {
                input: "4".to_string(),
            },
        )
        .unwrap();
        assert_eq!(view.selected_ids, vec![1001, 1002, 1003, 1004]);
        assert_eq!(view.target_count, 4);
    }

    #[tokio::test]
    async fn invalid_bulk_input_clears_selection() {
        let state = test_state(FakeCatalog::new(100));
        let id = session(&state).await;
        handle_bulk_target(&state, &id, BulkTargetRequest { input: "8".into() }).unwrap();

        let view =
            handle_bulk_target(&state, &id, BulkTargetRequest { input: "-3".into() }).unwrap();
        assert_eq!(view.target_count, 0);
        assert!(view.selected_ids.is_empty());
    }

    #[tokio::test]
    async fn unknown_session() {
        let state = test_state(FakeCatalog::new(100));

        let result = handle_toggle(
            &state,
            "missing",
            ToggleRequest {
                selected_ids: HashSet::new(),
            },
        );
        assert!(matches!(result, Err(AppError::SessionNotFound(_))));
    }
}
