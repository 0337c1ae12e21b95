//! Page windows over the ordered record collection.

use crate::error::{Error, Result};
use crate::{Artwork, GlobalIndex, RecordId};
use serde::Serialize;

/// One fetched slice of a conceptually larger, 1-indexed ordered collection.
///
/// A window is replaced wholesale on every page change; records from the
/// previous page are not retained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    offset: u64,
    page_size: u64,
    total_count: u64,
    items: Vec<Artwork>,
}

impl PageWindow {
    /// Create a window, checking that the items fit in the page.
    pub fn new(offset: u64, page_size: u64, total_count: u64, items: Vec<Artwork>) -> Result<Self> {
        check_bounds(offset, page_size)?;
        if items.len() as u64 > page_size {
            return Err(Error::PageOverflow {
                items: items.len(),
                page_size,
            });
        }

        Ok(Self {
            offset,
            page_size,
            total_count,
            items,
        })
    }

    /// Build a window for an already validated page size, dropping any
    /// records past the end of the page.
    pub(crate) fn fitted(
        offset: u64,
        page_size: u64,
        total_count: u64,
        mut items: Vec<Artwork>,
    ) -> Self {
        debug_assert!(page_size > 0);
        items.truncate(page_size as usize);
        Self {
            offset,
            page_size,
            total_count,
            items,
        }
    }

    /// Create a window with no records and a zero total.
    pub fn empty(offset: u64, page_size: u64) -> Result<Self> {
        Self::new(offset, page_size, 0, Vec::new())
    }

    /// Number of records before this page in the collection.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of records on the page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of records in the whole collection.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Records on this page, in collection order.
    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    /// Consume the window and return its records.
    pub fn into_items(self) -> Vec<Artwork> {
        self.items
    }

    /// 1-indexed page number of this window.
    pub fn page_number(&self) -> u64 {
        page_number(self.offset, self.page_size)
    }

    /// Global (1-indexed) position of the record at `local_index`.
    pub fn global_index(&self, local_index: usize) -> GlobalIndex {
        self.offset + local_index as u64 + 1
    }

    /// Iterate records paired with their global index.
    pub fn indexed(&self) -> impl Iterator<Item = (GlobalIndex, &Artwork)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, artwork)| (self.global_index(i), artwork))
    }

    /// Check whether a record is on this page.
    pub fn contains(&self, id: RecordId) -> bool {
        self.items.iter().any(|artwork| artwork.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Check that a page of `page_size` records starting after `offset` is
/// addressable: the last global index, `offset + page_size`, fits in a `u64`.
pub(crate) fn check_bounds(offset: u64, page_size: u64) -> Result<()> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    if offset.checked_add(page_size).is_none() {
        return Err(Error::OffsetOutOfRange { offset, page_size });
    }
    Ok(())
}

/// 1-indexed page number for a page-aligned offset.
///
/// `page_size` must be non-zero and the page must pass the window bounds.
pub fn page_number(offset: u64, page_size: u64) -> u64 {
    offset / page_size + 1
}
