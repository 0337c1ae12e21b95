//! What the rendering layer draws on each render cycle.

use crate::{compute_visible_selection, Artwork, PageCache, RecordId, SelectionState};
use serde::{Deserialize, Serialize};

/// Per-render snapshot of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderView {
    /// Records on the visible page
    pub items: Vec<Artwork>,
    /// Ids on the visible page that are checked, ascending
    pub selected_ids: Vec<RecordId>,
    pub total_count: u64,
    /// Offset the pager should show (a page still loading counts)
    pub offset: u64,
    pub page_size: u64,
    pub page_number: u64,
    pub loading: bool,
    /// Bulk target in effect (0 = none)
    pub target_count: u64,
    /// Selected records across the whole collection
    pub selected_total: u64,
    /// Why the visible page is empty, if its fetch failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderView {
    /// Build the view of `cache` under `selection`.
    pub fn build(cache: &PageCache, selection: &SelectionState) -> Self {
        let window = cache.window();
        let (offset, page_size) = cache.position();

        Self {
            items: window.items().to_vec(),
            selected_ids: compute_visible_selection(window, selection)
                .into_iter()
                .collect(),
            total_count: window.total_count(),
            offset,
            page_size,
            page_number: crate::page_number(offset, page_size),
            loading: cache.is_loading(),
            target_count: selection.target_count(),
            selected_total: selection.selected_total(window.total_count()),
            error: cache.last_error().map(ToString::to_string),
        }
    }
}
