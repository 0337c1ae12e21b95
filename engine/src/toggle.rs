//! Folding a page's checkbox state back into the selection.

use crate::{PageWindow, RecordId, SelectionState};
use std::collections::HashSet;

/// Apply the table's new checkbox state for the visible page.
///
/// `newly_selected` is the complete set of checked ids on `page`, not a
/// delta. Every record on the page is visited exactly once:
///
/// - inside the bulk range, a checked record leaves `explicit_exclude` and an
///   unchecked one joins it
/// - outside the bulk range, a checked record joins `explicit_include` and an
///   unchecked one leaves it
///
/// Ids in `newly_selected` that are not on the page are ignored. The bulk
/// target is carried over unchanged.
pub fn apply_toggle(
    page: &PageWindow,
    selection: &SelectionState,
    newly_selected: &HashSet<RecordId>,
) -> SelectionState {
    let mut next = selection.clone();

    for (global_index, artwork) in page.indexed() {
        let checked = newly_selected.contains(&artwork.id);

        if selection.in_bulk_range(global_index) {
            if checked {
                next.unexclude(artwork.id);
            } else {
                next.exclude(artwork.id);
            }
        } else if checked {
            next.include(artwork.id);
        } else {
            next.uninclude(artwork.id);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_visible_selection, Artwork};

    fn page_at(offset: u64, page_size: u64, total: u64) -> PageWindow {
        let end = (offset + page_size).min(total);
        let items = (offset + 1..=end)
            .map(|id| Artwork::new(id, format!("Artwork {}", id)))
            .collect();
        PageWindow::new(offset, page_size, total, items).unwrap()
    }

    fn ids(items: impl IntoIterator<Item = RecordId>) -> HashSet<RecordId> {
        items.into_iter().collect()
    }

    fn visible_as_set(page: &PageWindow, selection: &SelectionState) -> HashSet<RecordId> {
        compute_visible_selection(page, selection).into_iter().collect()
    }

    #[test]
    fn target_count_is_unchanged() {
        let page = page_at(0, 12, 100);
        let selection = SelectionState::with_target(30);

        let next = apply_toggle(&page, &selection, &HashSet::new());
        assert_eq!(next.target_count(), 30);
        assert_eq!(next.explicit_exclude().len(), 12);
    }

    #[test]
    fn off_then_on_inside_range_restores_state() {
        let page = page_at(0, 12, 100);
        let original = SelectionState::with_target(10);
        let all = visible_as_set(&page, &original);

        let mut without_three = all.clone();
        without_three.remove(&3);

        let toggled_off = apply_toggle(&page, &original, &without_three);
        assert!(toggled_off.explicit_exclude().contains(&3));

        let toggled_on = apply_toggle(&page, &toggled_off, &all);
        assert_eq!(toggled_on, original);
    }

    #[test]
    fn on_then_off_outside_range_restores_state() {
        let page = page_at(12, 12, 100);
        let original = SelectionState::with_target(5);
        let none = visible_as_set(&page, &original);
        assert!(none.is_empty());

        let toggled_on = apply_toggle(&page, &original, &ids([20]));
        assert_eq!(toggled_on.explicit_include().len(), 1);

        let toggled_off = apply_toggle(&page, &toggled_on, &none);
        assert_eq!(toggled_off, original);
    }

    #[test]
    fn range_boundary_inside_one_page() {
        // Global indexes 1..=12, bulk range ends at 5
        let page = page_at(0, 12, 100);
        let selection = SelectionState::with_target(5);

        // Uncheck index 5 (in range) and check index 6 (out of range)
        let checked = ids([1, 2, 3, 4, 6]);
        let next = apply_toggle(&page, &selection, &checked);

        assert_eq!(next.explicit_exclude(), &ids([5]));
        assert_eq!(next.explicit_include(), &ids([6]));
        assert_eq!(visible_as_set(&page, &next), checked);
    }

    #[test]
    fn ids_off_page_are_ignored() {
        let page = page_at(0, 4, 100);
        let checked = ids([1, 77]);

        let next = apply_toggle(&page, &SelectionState::new(), &checked);
        assert_eq!(next.explicit_include(), &ids([1]));
    }

    #[test]
    fn other_pages_overrides_are_kept() {
        let first = page_at(0, 4, 100);
        let second = page_at(4, 4, 100);

        let selection = apply_toggle(&first, &SelectionState::new(), &ids([2]));
        let selection = apply_toggle(&second, &selection, &ids([6]));

        assert_eq!(selection.explicit_include(), &ids([2, 6]));
    }

    #[test]
    fn partial_last_page() {
        let last = page_at(96, 12, 100);
        let selection = SelectionState::with_target(1000);

        let checked = ids([97, 98, 100]);
        let next = apply_toggle(&last, &selection, &checked);

        assert_eq!(next.explicit_exclude(), &ids([99]));
        assert!(next.explicit_include().is_empty());
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_step() -> impl Strategy<Value = (u64, Vec<bool>)> {
            (0u64..8, proptest::collection::vec(any::<bool>(), 6))
        }

        proptest! {
            #[test]
            fn prop_overrides_stay_disjoint(
                target in 0u64..40,
                steps in proptest::collection::vec(arb_step(), 1..20),
            ) {
                let mut selection = SelectionState::with_target(target);

                for (page_index, checks) in steps {
                    let page = page_at(page_index * 6, 6, 45);
                    let checked: HashSet<RecordId> = page
                        .items()
                        .iter()
                        .zip(checks.iter())
                        .filter(|(_, checked)| **checked)
                        .map(|(artwork, _)| artwork.id)
                        .collect();

                    selection = apply_toggle(&page, &selection, &checked);

                    prop_assert!(selection
                        .explicit_include()
                        .is_disjoint(selection.explicit_exclude()));
                    // Record ids equal global indexes in these pages
                    for id in selection.explicit_include() {
                        prop_assert!(!selection.in_bulk_range(*id));
                    }
                    for id in selection.explicit_exclude() {
                        prop_assert!(selection.in_bulk_range(*id));
                    }
                    prop_assert_eq!(
                        compute_visible_selection(&page, &selection)
                            .into_iter()
                            .collect::<HashSet<_>>(),
                        checked
                    );
                }
            }
        }
    }
}
