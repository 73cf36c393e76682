//! # Command Layer
//!
//! This module contains the **core business logic** of todoz. Each command
//! lives in its own submodule and implements pure Rust functions operating
//! on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on [`crate::model::Todo`] and the other domain types
//! - Return structured [`CmdResult`]s with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **User interaction**: No prompts or dialogs (return data, UI decides)
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. Invalid user input (blank
//! todo text) is a **no-op-with-signal**: the command succeeds with an
//! error-level [`CmdMessage`] and performs no mutation, leaving the `Err`
//! channel for genuine faults (storage failures). Removing or editing an
//! id with no matching record is a quiet no-op.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! [`crate::store::memory::InMemoryStore`], cover the logic branches and
//! edge cases, and verify the `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`add`]: Create new todos
//! - [`remove`]: Delete todos
//! - [`edit`]: Replace a todo's text
//! - [`toggle`]: Set or flip the completion flag
//! - [`list`]: Project the collection into a filtered, sorted view

use serde::Serialize;

use crate::model::Todo;

pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod toggle;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    /// True if any message carries [`MessageLevel::Error`].
    pub fn has_error(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}
