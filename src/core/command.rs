use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Unavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Unavailable { message, reason_code, retryable }
            }
            LibraryError::Conflict { message, reason_code } => {
                CommandError::Conflict { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Validation { message, .. } => { message }
            CommandError::NotFound { message } => { message }
            CommandError::DuplicateKey { message } => { message }
            CommandError::Unavailable { message, .. } => { message }
            CommandError::Conflict { message, .. } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Runtime { message, .. } => { message }
        }
    }
}
