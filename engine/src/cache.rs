//! The page cache: the currently loaded window plus request bookkeeping.
//!
//! Fetching happens outside the engine. The cache hands out a
//! [`PageRequest`] for every page change and later receives the outcome
//! through [`PageCache::resolve`]. Only the outcome of the most recently
//! issued request is applied; an older request that resolves late is
//! discarded, so quick pagination never shows a stale page.

use crate::error::{Error, FetchError, Result};
use crate::page::check_bounds;
use crate::{page_number, Artwork, PageWindow, RequestSeq, RequestSequence};

/// A page fetch the caller should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number to pass back to [`PageCache::resolve`]
    pub seq: RequestSeq,
    pub offset: u64,
    pub page_size: u64,
    /// 1-indexed page number to ask the catalog for
    pub page_number: u64,
}

/// Records and collection size as returned by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub items: Vec<Artwork>,
    pub total_count: u64,
}

/// What happened to a resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The response became the current window
    Applied,
    /// A later request was issued; the response was dropped
    Stale,
    /// The fetch failed; the window was emptied
    Failed(FetchError),
}

/// Currently loaded page window and in-flight request state.
#[derive(Debug, Clone)]
pub struct PageCache {
    window: PageWindow,
    requests: RequestSequence,
    /// Request awaiting resolution, if the latest one has not resolved yet
    pending: Option<PageRequest>,
    last_error: Option<FetchError>,
}

impl PageCache {
    /// Create a cache holding an empty first page.
    pub fn new(page_size: u64) -> Result<Self> {
        Ok(Self {
            window: PageWindow::empty(0, page_size)?,
            requests: RequestSequence::new(),
            pending: None,
            last_error: None,
        })
    }

    /// Start loading the page at `offset`.
    ///
    /// `offset` must be a multiple of `page_size`, and the whole page must
    /// be addressable. Any request still in flight becomes stale.
    pub fn request(&mut self, offset: u64, page_size: u64) -> Result<PageRequest> {
        check_bounds(offset, page_size)?;
        if offset % page_size != 0 {
            return Err(Error::UnalignedOffset { offset, page_size });
        }

        let request = PageRequest {
            seq: self.requests.tick(),
            offset,
            page_size,
            page_number: page_number(offset, page_size),
        };
        self.pending = Some(request);
        Ok(request)
    }

    /// Feed the outcome of a fetch back into the cache.
    pub fn resolve(
        &mut self,
        seq: RequestSeq,
        outcome: std::result::Result<FetchedPage, FetchError>,
    ) -> Resolution {
        let request = match self.pending {
            Some(request) if self.requests.is_current(seq) && request.seq == seq => request,
            _ => return Resolution::Stale,
        };
        self.pending = None;

        match outcome {
            Ok(fetched) => {
                // The catalog may ignore the limit; never hold more than a page.
                self.window = PageWindow::fitted(
                    request.offset,
                    request.page_size,
                    fetched.total_count,
                    fetched.items,
                );
                self.last_error = None;
                Resolution::Applied
            }
            Err(err) => {
                self.window =
                    PageWindow::fitted(request.offset, request.page_size, 0, Vec::new());
                self.last_error = Some(err.clone());
                Resolution::Failed(err)
            }
        }
    }

    /// The loaded window.
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Whether the most recent request is still in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The request the cache is waiting for, if any.
    pub fn pending(&self) -> Option<&PageRequest> {
        self.pending.as_ref()
    }

    /// Sequence number of the most recently issued request.
    pub fn latest_seq(&self) -> RequestSeq {
        self.requests.latest
    }

    /// Error of the fetch that produced the current window, if it failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Offset and page size the user is looking at, including a page still loading.
    pub fn position(&self) -> (u64, u64) {
        match &self.pending {
            Some(request) => (request.offset, request.page_size),
            None => (self.window.offset(), self.window.page_size()),
        }
    }
}
