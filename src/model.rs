//! # Domain Model: Todo Records and Text Normalization
//!
//! This module defines the core data structure for todoz: [`Todo`].
//! It also handles text normalization, which is crucial for data integrity.
//!
//! ## The Problem
//!
//! Users type todo text in chaotic shapes: leading spaces from copy-paste,
//! trailing whitespace, or nothing but whitespace at all. If we stored that
//! raw, lists would render broken-looking entries and "empty" todos would
//! accumulate.
//!
//! ## Normalization Pipeline
//!
//! Todoz accepts any UTF-8 text but normalizes it before a record is
//! created or edited:
//!
//! 1. **Trim**: Strip leading/trailing whitespace.
//! 2. **Reject blanks**: If nothing remains, the input is invalid and no
//!    record is created or changed.
//!
//! ## Record Lifecycle
//!
//! - Created by the add command: `id` (v4 UUID) and `created_at` are
//!   assigned at construction and never change afterwards.
//! - Mutated by the edit command (`text` only) and the done-toggle (`done`
//!   only).
//! - Destroyed by the remove command.
//!
//! ## Key Items
//!
//! - [`Todo::new`]: Constructs a record from raw text, normalizing it
//! - [`normalize_text`]: Trims raw input, returning `None` for blanks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TodozError};

/// A single task record.
///
/// `id` and `created_at` are fixed at construction; `text` and `done` are
/// the only fields commands may change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new record from raw user text.
    ///
    /// The text is normalized (trimmed); whitespace-only input is rejected
    /// with [`TodozError::InvalidText`]. New records start undone.
    pub fn new(raw_text: &str) -> Result<Self> {
        let text = normalize_text(raw_text).ok_or(TodozError::InvalidText)?;
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            done: false,
            created_at: Utc::now(),
        })
    }

    /// Replace the record's text with a normalized version of `raw_text`.
    ///
    /// All other fields are untouched. Whitespace-only input is rejected
    /// and leaves the record unchanged.
    pub fn set_text(&mut self, raw_text: &str) -> Result<()> {
        let text = normalize_text(raw_text).ok_or(TodozError::InvalidText)?;
        self.text = text;
        Ok(())
    }
}

/// Normalizes raw todo text.
///
/// Returns `None` if the input has no text at all.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
