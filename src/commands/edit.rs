use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::TodoStore;
use uuid::Uuid;

pub fn run<S: TodoStore>(store: &mut S, id: &Uuid, new_text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut todo = match store.get_todo(id) {
        Ok(todo) => todo,
        // Editing an id with no matching record is a quiet no-op.
        Err(TodozError::TodoNotFound(_)) => return Ok(result),
        Err(e) => return Err(e),
    };

    // Validate before touching the store so a blank edit mutates nothing.
    match todo.set_text(new_text) {
        Ok(()) => {}
        Err(TodozError::InvalidText) => {
            result.add_message(CmdMessage::error("Please enter a valid todo"));
            return Ok(result);
        }
        Err(e) => return Err(e),
    }

    store.save_todo(&todo)?;

    result.add_message(CmdMessage::success(format!("Todo updated: {}", todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn edit_replaces_text_only() {
        let mut store = InMemoryStore::new();
        let created = add::run(&mut store, "old text").unwrap().affected_todos[0].clone();

        run(&mut store, &created.id, "  new text ").unwrap();

        let updated = store.get_todo(&created.id).unwrap();
        assert_eq!(updated.text, "new text");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.done, created.done);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn edit_blank_is_noop_with_signal() {
        let mut store = InMemoryStore::new();
        let id = add::run(&mut store, "keep me").unwrap().affected_todos[0].id;

        let result = run(&mut store, &id, " \t ").unwrap();

        assert!(result.has_error());
        assert!(result.affected_todos.is_empty());
        assert_eq!(store.get_todo(&id).unwrap().text, "keep me");
    }

    #[test]
    fn edit_missing_id_is_quiet_noop() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "untouched").unwrap();

        let result = run(&mut store, &Uuid::new_v4(), "new text").unwrap();

        assert!(result.affected_todos.is_empty());
        assert!(result.messages.is_empty());
        let todos = store.list_todos().unwrap();
        assert_eq!(todos[0].text, "untouched");
    }

    #[test]
    fn edit_keeps_record_position() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "one").unwrap();
        let id = add::run(&mut store, "two").unwrap().affected_todos[0].id;
        add::run(&mut store, "three").unwrap();

        run(&mut store, &id, "two edited").unwrap();

        let todos = store.list_todos().unwrap();
        assert_eq!(todos[1].text, "two edited");
    }
}
