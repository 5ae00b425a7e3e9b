use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
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
    // Raised for I/O failures on save and for unparseable data on load. Loading
    // never keeps a partial catalog once this is returned.
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

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_issued(message: &str) -> LibraryError {
        LibraryError::AlreadyIssued { message: message.to_string() }
    }

    pub fn not_issued(message: &str) -> LibraryError {
        LibraryError::NotIssued { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn persistence(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Persistence { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // plain message without the reason code, suitable for showing to a user
    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => { message }
            LibraryError::AlreadyIssued { message } => { message }
            LibraryError::NotIssued { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Persistence { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::persistence(
            err.to_string().as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<std::num::ParseIntError> for LibraryError {
    fn from(err: std::num::ParseIntError) -> Self {
        LibraryError::persistence(
            format!("invalid number {}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotIssued { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Persistence { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog and store operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    Available,
    Issued,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        *self == BookStatus::Available
    }
}

impl From<bool> for BookStatus {
    fn from(available: bool) -> Self {
        if available { BookStatus::Available } else { BookStatus::Issued }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => BookStatus::Available,
            _ => BookStatus::Issued,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}
