//! Reconciliation of the selection model against a loaded page.
//!
//! The selection spans pages that were never loaded, so the visible
//! selection is derived, never stored. It is recomputed on every page load
//! and every selection change.
//!
//! # Algorithm
//!
//! For each record at local index `i`, with `g = offset + i + 1`:
//!
//! 1. `g` inside the bulk range and the id not excluded: selected
//! 2. otherwise the id explicitly included: selected
//! 3. otherwise: not selected

use crate::{PageWindow, RecordId, SelectionState};
use std::collections::BTreeSet;

/// Ids of the records on `page` that `selection` marks as selected.
///
/// Only ids present in the page are ever returned.
pub fn compute_visible_selection(
    page: &PageWindow,
    selection: &SelectionState,
) -> BTreeSet<RecordId> {
    page.indexed()
        .filter(|(global_index, artwork)| selection.is_selected(artwork.id, *global_index))
        .map(|(_, artwork)| artwork.id)
        .collect()
}
