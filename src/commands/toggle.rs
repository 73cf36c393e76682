use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::TodoStore;
use uuid::Uuid;

/// Set the completion flag to an explicit value.
pub fn set_done<S: TodoStore>(store: &mut S, id: &Uuid, done: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut todo = match store.get_todo(id) {
        Ok(todo) => todo,
        Err(TodozError::TodoNotFound(_)) => return Ok(result),
        Err(e) => return Err(e),
    };

    todo.done = done;
    store.save_todo(&todo)?;

    let verb = if done { "completed" } else { "reopened" };
    result.add_message(CmdMessage::success(format!("Todo {}: {}", verb, todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}

/// Flip the completion flag.
pub fn toggle<S: TodoStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let done = match store.get_todo(id) {
        Ok(todo) => todo.done,
        Err(TodozError::TodoNotFound(_)) => return Ok(CmdResult::default()),
        Err(e) => return Err(e),
    };
    set_done(store, id, !done)
}
