//! A single table session: one page cache and one selection.
//!
//! Events from the rendering layer (page change, checkbox change, apply) are
//! methods here. Each runs to completion; the only suspended work is the page
//! fetch, which happens between [`Session::change_page`] and
//! [`Session::resolve_page`].

use crate::error::{FetchError, Result};
use crate::{
    apply_toggle, FetchedPage, PageCache, PageRequest, RecordId, RenderView, RequestSeq,
    Resolution, SelectionState,
};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Session {
    cache: PageCache,
    selection: SelectionState,
}

impl Session {
    /// Create a session with an empty first page of `page_size` records.
    pub fn new(page_size: u64) -> Result<Self> {
        Ok(Self {
            cache: PageCache::new(page_size)?,
            selection: SelectionState::new(),
        })
    }

    /// Page or page-size change from the pager.
    pub fn change_page(&mut self, offset: u64, page_size: u64) -> Result<PageRequest> {
        self.cache.request(offset, page_size)
    }

    /// Fetch outcome for a request issued by [`Session::change_page`].
    pub fn resolve_page(
        &mut self,
        seq: RequestSeq,
        outcome: std::result::Result<FetchedPage, FetchError>,
    ) -> Resolution {
        self.cache.resolve(seq, outcome)
    }

    /// Checkbox change on the visible page.
    pub fn toggle(&mut self, newly_selected: &HashSet<RecordId>) {
        self.selection = apply_toggle(self.cache.window(), &self.selection, newly_selected);
    }

    /// Apply button with the current contents of the number field.
    pub fn apply_bulk_target(&mut self, input: &str) {
        self.selection = self.selection.set_bulk_target(input);
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// What to draw now.
    pub fn view(&self) -> RenderView {
        RenderView::build(&self.cache, &self.selection)
    }
}
