//! Error types for the Artsel engine.

use thiserror::Error;

/// All possible errors from the Artsel engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Pagination errors
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("offset {offset} is not aligned to page size {page_size}")]
    UnalignedOffset { offset: u64, page_size: u64 },

    #[error("offset {offset} with page size {page_size} is past the addressable range")]
    OffsetOutOfRange { offset: u64, page_size: u64 },

    #[error("page holds {items} items but page size is {page_size}")]
    PageOverflow { items: usize, page_size: u64 },
}

/// Why a page fetch produced no page.
///
/// These are values handed to [`crate::PageCache::resolve`], not failures of
/// the engine itself: a failed fetch degrades to an empty page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("fetch failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Parse(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidPageSize;
        assert_eq!(err.to_string(), "page size must be greater than zero");

        let err = Error::UnalignedOffset {
            offset: 13,
            page_size: 12,
        };
        assert_eq!(err.to_string(), "offset 13 is not aligned to page size 12");

        let err = Error::OffsetOutOfRange {
            offset: u64::MAX,
            page_size: 1,
        };
        assert_eq!(
            err.to_string(),
            "offset 18446744073709551615 with page size 1 is past the addressable range"
        );

        let err = Error::PageOverflow {
            items: 13,
            page_size: 12,
        };
        assert_eq!(err.to_string(), "page holds 13 items but page size is 12");

        let err = FetchError::Parse("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "malformed response: expected value at line 1"
        );
    }
}
