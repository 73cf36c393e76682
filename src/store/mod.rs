//! # Storage Layer
//!
//! This module defines the storage abstraction for todoz. The [`TodoStore`]
//! trait is the seam between the command layer and the backing collection.
//!
//! ## Owning Store
//!
//! Records live inside the store; callers never hold a mutable reference to
//! the backing collection. All mutation flows through the trait methods,
//! and reads hand out owned copies. This keeps the order guarantee in one
//! place instead of spreading ambient mutation-by-reference across module
//! boundaries.
//!
//! ## Insertion Order
//!
//! `list_todos` returns records in the order they were added. Filters and
//! stable sorts in the projection engine build on that order, so the store
//! must preserve it across saves and deletes.
//!
//! ## Save Semantics
//!
//! `save_todo` is create-or-update: a record whose `id` already exists is
//! replaced in place (keeping its position), otherwise the record is
//! appended to the end.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: The production implementation. The data
//!   layer is deliberately in-memory only; there is no persistence backend.

use crate::error::Result;
use crate::model::Todo;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for todo storage.
///
/// Implementations must preserve insertion order and keep `id` unique
/// within the collection.
pub trait TodoStore {
    /// Save a todo (create or update)
    fn save_todo(&mut self, todo: &Todo) -> Result<()>;

    /// Get a todo by ID
    fn get_todo(&self, id: &Uuid) -> Result<Todo>;

    /// List all todos in insertion order
    fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Delete a todo permanently
    fn delete_todo(&mut self, id: &Uuid) -> Result<()>;
}
