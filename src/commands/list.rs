use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TodoStore;
use crate::view::{project, Filter, SortSpec};

pub fn run<S: TodoStore>(
    store: &S,
    filter: Option<Filter>,
    sort: Option<&SortSpec>,
) -> Result<CmdResult> {
    let todos = store.list_todos()?;
    let processed = project(&todos, filter, sort);
    Ok(CmdResult::default().with_listed_todos(processed))
}
