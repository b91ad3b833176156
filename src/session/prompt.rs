//! Parsing of the player's answers

use crate::error::{BlackjackError, BlackjackResult};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Leaderboard,
    Reset,
    Quit,
}

impl MenuChoice {
    /// Parse a menu answer. Only the exact single-character commands are
    /// accepted, surrounding whitespace aside.
    pub fn parse(input: &str) -> BlackjackResult<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::Play),
            "l" => Ok(MenuChoice::Leaderboard),
            "r" => Ok(MenuChoice::Reset),
            "q" => Ok(MenuChoice::Quit),
            other => Err(BlackjackError::InvalidChoice(other.to_string())),
        }
    }
}

/// Parse a y/n answer, ignoring case
pub fn parse_yes_no(input: &str) -> BlackjackResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(BlackjackError::InvalidChoice(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_parsing() {
        assert_eq!(MenuChoice::parse("1\n").unwrap(), MenuChoice::Play);
        assert_eq!(MenuChoice::parse("l").unwrap(), MenuChoice::Leaderboard);
        assert_eq!(MenuChoice::parse(" r ").unwrap(), MenuChoice::Reset);
        assert_eq!(MenuChoice::parse("q").unwrap(), MenuChoice::Quit);
        assert!(MenuChoice::parse("Q").is_err());
        assert!(MenuChoice::parse("").is_err());
        assert!(MenuChoice::parse("play").is_err());
    }

    #[test]
    fn test_yes_no_parsing() {
        assert!(parse_yes_no("y").unwrap());
        assert!(parse_yes_no("Y\r\n").unwrap());
        assert!(!parse_yes_no("n").unwrap());
        assert!(!parse_yes_no("N").unwrap());
        assert!(matches!(
            parse_yes_no("yes"),
            Err(BlackjackError::InvalidChoice(s)) if s == "yes"
        ));
    }
}
