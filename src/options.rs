//! Static option catalogs for selection UI.
//!
//! These are plain immutable configuration data: the set of filters a
//! presentation layer can offer, and the four sort choices with their
//! display labels. Each label maps to the `(key, order)` pair that
//! produces the ordering the label promises, so "Latest" really is
//! newest-first.

use once_cell::sync::Lazy;

use crate::view::{Filter, SortKey, SortOrder, SortSpec};

/// Filter choices, in display order.
pub const FILTER_OPTIONS: [Filter; 3] = [Filter::All, Filter::Undone, Filter::Done];

/// Sort choices, in display order.
pub static SORT_OPTIONS: Lazy<[SortSpec; 4]> = Lazy::new(|| {
    [
        SortSpec::new(SortKey::Date, SortOrder::Descending, "Latest"),
        SortSpec::new(SortKey::Date, SortOrder::Ascending, "Oldest"),
        SortSpec::new(SortKey::Name, SortOrder::Ascending, "A to Z"),
        SortSpec::new(SortKey::Name, SortOrder::Descending, "Z to A"),
    ]
});
