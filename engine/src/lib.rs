//! # Artsel Engine
//!
//! A deterministic selection engine for paginated record tables.
//!
//! This crate holds the core logic behind a "select rows across pages" table:
//! a user may select the first N records of a collection that is never fully
//! loaded, then carve exceptions out of that range or add records outside it
//! one checkbox at a time.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of HTTP, browsers, or timers
//! - **Deterministic**: Same inputs always produce the same selection
//! - **Explicit state**: Every function takes state in and returns state out
//!
//! ## Core Concepts
//!
//! ### Page Window
//!
//! A [`PageWindow`] is one fetched slice of a 1-indexed ordered collection:
//! its offset, page size, the collection's total count, and the records on
//! the page. Record positions are mapped to global indexes with
//! `offset + local_index + 1`.
//!
//! ### Selection State
//!
//! A [`SelectionState`] combines:
//! - a bulk target count (the first N records are selected by default)
//! - explicit exclusions carved out of the bulk range
//! - explicit inclusions outside the bulk range
//!
//! ### Reconciliation
//!
//! [`compute_visible_selection`] derives which records of the loaded page are
//! selected. [`apply_toggle`] folds a page's checkbox state back into the
//! selection.
//!
//! ### Page Cache
//!
//! [`PageCache`] tracks the loaded window and sequences page requests so that
//! a response for an older request never overwrites a newer one.
//!
//! ## Quick Start
//!
//! ```rust
//! use artsel_engine::{
//!     apply_toggle, compute_visible_selection, Artwork, PageWindow, SelectionState,
//! };
//! use std::collections::HashSet;
//!
//! // 1. A page of 3 records at the start of a 10 record collection
//! let items = (1..=3).map(|id| Artwork::new(id, format!("Artwork {id}"))).collect();
//! let page = PageWindow::new(0, 3, 10, items).unwrap();
//!
//! // 2. Select the first 2 records of the collection
//! let selection = SelectionState::new().set_bulk_target("2");
//! let visible = compute_visible_selection(&page, &selection);
//! assert_eq!(visible.into_iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! // 3. The user unchecks record 1 and checks record 3
//! let checked: HashSet<_> = [2, 3].into_iter().collect();
//! let selection = apply_toggle(&page, &selection, &checked);
//! assert!(selection.explicit_exclude().contains(&1));
//! assert!(selection.explicit_include().contains(&3));
//! ```

pub mod cache;
pub mod error;
pub mod page;
pub mod reconcile;
pub mod record;
pub mod selection;
pub mod sequence;
pub mod session;
pub mod toggle;
pub mod view;

// Re-export main types at crate root
pub use cache::{FetchedPage, PageCache, PageRequest, Resolution};
pub use error::{Error, FetchError};
pub use page::{page_number, PageWindow};
pub use reconcile::compute_visible_selection;
pub use record::Artwork;
pub use selection::{parse_bulk_target, SelectionState};
pub use sequence::RequestSequence;
pub use session::Session;
pub use toggle::apply_toggle;
pub use view::RenderView;

/// Type aliases for clarity
pub type RecordId = u64;
pub type GlobalIndex = u64;
pub type RequestSeq = u64;
