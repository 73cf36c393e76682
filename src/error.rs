use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Todo not found: {0}")]
    TodoNotFound(Uuid),

    #[error("Todo text must not be empty")]
    InvalidText,

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
