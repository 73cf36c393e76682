use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let todo = match Todo::new(text) {
        Ok(todo) => todo,
        Err(TodozError::InvalidText) => {
            result.add_message(CmdMessage::error("Please enter a valid todo"));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    store.save_todo(&todo)?;

    result.add_message(CmdMessage::success(format!("Todo added: {}", todo.text)));
    result.affected_todos.push(todo);
    Ok(result)
}
