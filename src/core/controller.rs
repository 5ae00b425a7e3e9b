use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(data_file: &Path, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(data_file),
            store,
        }
    }
}

// ShellMessage is a single line of output shown to the user
pub(crate) type ShellMessage = String;

impl From<CommandError> for ShellMessage {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                "Book ID not found.".to_string()
            }
            CommandError::AlreadyIssued { .. } => {
                "This book is already issued.".to_string()
            }
            CommandError::NotIssued { .. } => {
                "This book was not issued.".to_string()
            }
            CommandError::Validation { message, .. } => {
                format!("Invalid input: {}", message)
            }
            CommandError::Persistence { message, .. } => {
                format!("Error saving file: {}", message)
            }
            CommandError::Serialization { message } => {
                format!("Error: {}", message)
            }
            CommandError::Runtime { message, .. } => {
                format!("Error: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ShellMessage};
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::new(Path::new("books.csv"), RepositoryStore::CsvFile);
        assert_eq!(RepositoryStore::CsvFile, state.store);
        assert_eq!(Path::new("books.csv"), state.config.data_file.as_path());
    }

    #[tokio::test]
    async fn test_should_map_command_errors() {
        assert_eq!("Book ID not found.", ShellMessage::from(CommandError::NotFound { message: "x".to_string() }));
        assert_eq!("This book is already issued.", ShellMessage::from(CommandError::AlreadyIssued { message: "x".to_string() }));
        assert_eq!("This book was not issued.", ShellMessage::from(CommandError::NotIssued { message: "x".to_string() }));
        assert_eq!("Error saving file: disk full", ShellMessage::from(
            CommandError::Persistence { message: "disk full".to_string(), reason_code: None }));
    }
}
