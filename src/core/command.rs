use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    AlreadyIssued {
        message: String,
    },
    NotIssued {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Persistence {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

// Commands borrow the catalog mutably for the duration of a single menu action.
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyIssued { message } => {
                CommandError::AlreadyIssued { message }
            }
            LibraryError::NotIssued { message } => {
                CommandError::NotIssued { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Persistence { message, reason_code } => {
                CommandError::Persistence { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
