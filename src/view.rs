//! # Projection Engine
//!
//! Derived views of the todo collection: filter by completion status, then
//! order with a comparator keyed on a [`SortSpec`]. A projection is what a
//! presentation layer renders; it is always a fresh copy, so producing a
//! view never reorders or otherwise mutates the records held by the store.
//!
//! ## Filtering
//!
//! [`Filter`] selects a subset by completion status. Filtering preserves
//! the stable relative order of the input. The filter parameter of
//! [`project`] is an `Option`, which keeps "no filter requested" (`None`)
//! distinct from "filter applied, zero matches" (`Some` yielding an empty
//! view). An empty result is returned as-is.
//!
//! ## Sorting
//!
//! [`sort_todos`] is a stable comparator sort, so records with equal keys
//! keep their relative order.
//!
//! - `Name`: case-insensitive comparison of `text`. There is no stdlib
//!   locale collation, so lowercased Unicode comparison stands in for it.
//! - `Date`: comparison of `created_at`; `Ascending` is oldest-first.
//!
//! The user-visible orderings are fixed by the catalog in
//! [`crate::options`], which maps each display label to the `(key, order)`
//! pair producing it.

use serde::{Deserialize, Serialize};

use crate::model::Todo;

/// Completion-status filter for projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    All,
    Undone,
    Done,
}

/// The record field a sort compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Date,
    Name,
}

/// Sort direction. For `Date`, `Ascending` is oldest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A (key, direction) pair plus the label a selection UI displays for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
    pub label: String,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder, label: impl Into<String>) -> Self {
        Self {
            key,
            order,
            label: label.into(),
        }
    }
}

/// Select the subsequence matching `filter`, preserving relative order.
///
/// Pure: returns a new sequence, the input is untouched.
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    match filter {
        Filter::All => todos.to_vec(),
        Filter::Undone => todos.iter().filter(|t| !t.done).cloned().collect(),
        Filter::Done => todos.iter().filter(|t| t.done).cloned().collect(),
    }
}

/// Sort `todos` in place with the comparator described by `spec`.
///
/// The sort is stable: equal keys keep their relative order.
pub fn sort_todos(todos: &mut [Todo], spec: &SortSpec) {
    match (spec.key, spec.order) {
        (SortKey::Name, SortOrder::Ascending) => {
            todos.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));
        }
        (SortKey::Name, SortOrder::Descending) => {
            todos.sort_by(|a, b| b.text.to_lowercase().cmp(&a.text.to_lowercase()));
        }
        (SortKey::Date, SortOrder::Ascending) => {
            todos.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
        (SortKey::Date, SortOrder::Descending) => {
            todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}

/// Compute the filtered-then-sorted view of `todos`.
///
/// `None` for either step skips it. Always returns a fresh copy; the input
/// sequence is never mutated, whichever filter is in effect.
pub fn project(todos: &[Todo], filter: Option<Filter>, sort: Option<&SortSpec>) -> Vec<Todo> {
    let mut processed = match filter {
        Some(f) => filter_todos(todos, f),
        None => todos.to_vec(),
    };

    if let Some(spec) = sort {
        sort_todos(&mut processed, spec);
    }

    processed
}
