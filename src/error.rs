//! Error types for the BlackJack console game

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for game and leaderboard operations
#[derive(Error, Debug)]
pub enum BlackjackError {
    /// Answer not among the choices offered by a prompt
    #[error("Invalid option: {0:?}")]
    InvalidChoice(String),

    /// Player name was empty or only whitespace
    #[error("Player name cannot be empty")]
    EmptyName,

    /// Leaderboard file exists but does not hold a valid score list
    #[error("Leaderboard file {path:?} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Leaderboard could not be encoded
    #[error("Failed to encode leaderboard: {0}")]
    Encode(#[source] serde_json::Error),

    /// File or terminal I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BlackjackError {
    /// Errors the session reports and moves past instead of aborting on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BlackjackError::InvalidChoice(_)
                | BlackjackError::EmptyName
                | BlackjackError::CorruptStore { .. }
        )
    }
}

/// Result type alias for game operations
pub type BlackjackResult<T> = Result<T, BlackjackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(BlackjackError::EmptyName.is_recoverable());
        assert!(BlackjackError::InvalidChoice("x".to_string()).is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!BlackjackError::from(io).is_recoverable());
    }

    #[test]
    fn test_corrupt_store_message_names_file() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = BlackjackError::CorruptStore {
            path: PathBuf::from("scores.json"),
            source,
        };
        assert!(err.to_string().contains("scores.json"));
        assert!(err.is_recoverable());
    }
}
