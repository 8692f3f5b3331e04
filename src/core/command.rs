use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message } => {
                CommandError::Database { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

// The GraphQL adapter surfaces this text verbatim in its `errors` array.
impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Database { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Validation { message, reason_code: Some(reason) } => write!(f, "{} ({})", message, reason),
            CommandError::Validation { message, reason_code: None } => write!(f, "{}", message),
        }
    }
}
