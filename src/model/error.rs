use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A rejected field submission. The session is left unchanged.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },
    /// An operation attempted before the session holds what it needs;
    /// carries the hole numbers still missing.
    #[error("holes not ready: {holes:?}")]
    IncompleteState { holes: Vec<u8> },
}

impl EngineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn incomplete(holes: Vec<u8>) -> Self {
        EngineError::IncompleteState { holes }
    }
}
