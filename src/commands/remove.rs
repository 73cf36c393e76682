use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::TodoStore;
use uuid::Uuid;

pub fn run<S: TodoStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let todo = match store.get_todo(id) {
        Ok(todo) => todo,
        // Removing an id with no matching record is a quiet no-op.
        Err(TodozError::TodoNotFound(_)) => return Ok(result),
        Err(e) => return Err(e),
    };

    store.delete_todo(id)?;

    result.add_message(CmdMessage::success(format!("Todo removed: {}", todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}
