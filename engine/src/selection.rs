//! The authoritative selection model.
//!
//! A selection is a bulk target count plus two sets of explicit overrides:
//!
//! - with `target_count == 0` only `explicit_include` applies
//! - with `target_count > 0` the first `target_count` records of the
//!   collection are selected, `explicit_exclude` carves exceptions out of that
//!   range and `explicit_include` adds records outside it
//!
//! Fields are private. The only ways to produce a changed state are
//! [`SelectionState::set_bulk_target`] and [`crate::apply_toggle`], which
//! together keep the include and exclude sets disjoint and keep in-range ids
//! out of `explicit_include`.

use crate::{GlobalIndex, RecordId};
use std::collections::HashSet;

/// Selection over the whole (virtual) collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    target_count: u64,
    explicit_include: HashSet<RecordId>,
    explicit_exclude: HashSet<RecordId>,
}

impl SelectionState {
    /// Empty selection: no bulk range, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a new bulk target typed by the user.
    ///
    /// Any prior explicit include/exclude overrides are discarded, even when
    /// the new target equals the old one. Input that does not parse to a
    /// positive integer turns bulk selection off.
    pub fn set_bulk_target(&self, input: &str) -> Self {
        Self::with_target(parse_bulk_target(input).unwrap_or(0))
    }

    /// Fresh selection with the given bulk target and no overrides.
    pub fn with_target(target_count: u64) -> Self {
        Self {
            target_count,
            ..Self::default()
        }
    }

    pub fn target_count(&self) -> u64 {
        self.target_count
    }

    /// Records selected outside the bulk range.
    pub fn explicit_include(&self) -> &HashSet<RecordId> {
        &self.explicit_include
    }

    /// Records deselected inside the bulk range.
    pub fn explicit_exclude(&self) -> &HashSet<RecordId> {
        &self.explicit_exclude
    }

    /// Whether bulk selection is active.
    pub fn is_bulk(&self) -> bool {
        self.target_count > 0
    }

    /// Whether a global position falls inside the bulk range `[1, target_count]`.
    pub fn in_bulk_range(&self, global_index: GlobalIndex) -> bool {
        self.target_count > 0 && global_index <= self.target_count
    }

    /// Whether the record at `global_index` is selected.
    pub fn is_selected(&self, id: RecordId, global_index: GlobalIndex) -> bool {
        if self.in_bulk_range(global_index) && !self.explicit_exclude.contains(&id) {
            return true;
        }
        self.explicit_include.contains(&id)
    }

    /// Number of records selected across a collection of `total_count` records.
    pub fn selected_total(&self, total_count: u64) -> u64 {
        self.target_count
            .min(total_count)
            .saturating_sub(self.explicit_exclude.len() as u64)
            .saturating_add(self.explicit_include.len() as u64)
    }

    /// Whether nothing is selected anywhere.
    pub fn is_empty(&self) -> bool {
        self.target_count == 0 && self.explicit_include.is_empty()
    }

    // Mutation is crate-private so only the toggle path can touch overrides.

    pub(crate) fn include(&mut self, id: RecordId) {
        self.explicit_include.insert(id);
    }

    pub(crate) fn uninclude(&mut self, id: RecordId) {
        self.explicit_include.remove(&id);
    }

    pub(crate) fn exclude(&mut self, id: RecordId) {
        self.explicit_exclude.insert(id);
    }

    pub(crate) fn unexclude(&mut self, id: RecordId) {
        self.explicit_exclude.remove(&id);
    }
}

/// Parse a bulk target the way a browser's `parseInt` reads a number field.
///
/// Surrounding whitespace and trailing non-digits are ignored, so `"12abc"`
/// and `"3.9"` read as 12 and 3. Returns `None` when there are no leading
/// digits or the value is not positive. Values too large for `u64` saturate.
pub fn parse_bulk_target(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });

    if negative || value == 0 {
        None
    } else {
        Some(value)
    }
}
