//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all todoz operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over TodoStore
//!
//! `TodozApi<S: TodoStore>` is generic over the storage backend, so API
//! clients and tests construct it over [`crate::store::memory::InMemoryStore`].
//!
//! ## Testing Strategy
//!
//! API tests verify correct dispatch and return types, not command logic
//! (tested in the command modules) or storage behavior (tested in the
//! store modules).

use crate::commands;
use crate::error::Result;
use crate::store::TodoStore;
use crate::view::{Filter, SortSpec};
use uuid::Uuid;

/// The main API facade for todoz operations.
///
/// Generic over [`TodoStore`] to allow different storage backends.
/// All UI clients should interact through this API.
pub struct TodozApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodozApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_todo(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn remove_todo(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn edit_todo_text(&mut self, id: &Uuid, new_text: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, new_text)
    }

    pub fn set_done(&mut self, id: &Uuid, done: bool) -> Result<commands::CmdResult> {
        commands::toggle::set_done(&mut self.store, id, done)
    }

    pub fn toggle_done(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::toggle::toggle(&mut self.store, id)
    }

    pub fn list_todos(
        &self,
        filter: Option<Filter>,
        sort: Option<&SortSpec>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, sort)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> TodozApi<InMemoryStore> {
        TodozApi::new(InMemoryStore::new())
    }

    #[test]
    fn test_add_dispatches_and_returns_record() {
        let mut api = api();
        let res = api.add_todo("buy milk").unwrap();
        assert_eq!(res.affected_todos.len(), 1);
        assert_eq!(res.affected_todos[0].text, "buy milk");
    }

    #[test]
    fn test_list_dispatches_with_filter() {
        let mut api = api();
        api.add_todo("open").unwrap();
        let id = api.add_todo("closed").unwrap().affected_todos[0].id;
        api.set_done(&id, true).unwrap();

        let res = api.list_todos(Some(Filter::Done), None).unwrap();
        assert_eq!(res.listed_todos.len(), 1);
        assert_eq!(res.listed_todos[0].text, "closed");
    }

    #[test]
    fn test_remove_dispatches() {
        let mut api = api();
        let id = api.add_todo("doomed").unwrap().affected_todos[0].id;
        api.remove_todo(&id).unwrap();
        let res = api.list_todos(None, None).unwrap();
        assert!(res.listed_todos.is_empty());
    }

    #[test]
    fn test_edit_and_toggle_dispatch() {
        let mut api = api();
        let id = api.add_todo("draft").unwrap().affected_todos[0].id;

        api.edit_todo_text(&id, "final").unwrap();
        api.toggle_done(&id).unwrap();

        let res = api.list_todos(None, None).unwrap();
        assert_eq!(res.listed_todos[0].text, "final");
        assert!(res.listed_todos[0].done);
    }
}
