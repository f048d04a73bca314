use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Empty content")]
    EmptyContent,
}

/// Coarse error category used only to pick the log line; recovery is the same for all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transport-level failure talking to the API.
    Network,
    /// Another instance is polling with the same token.
    Conflict,
    Other,
}

impl DbotError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DbotError::Network(_) => ErrorClass::Network,
            DbotError::Conflict(_) => ErrorClass::Conflict,
            _ => ErrorClass::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbotError>;
