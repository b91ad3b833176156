//! Score persistence

pub mod scores;

pub use scores::{sorted_view, Leaderboard, ScoreRecord, ScoreStore, DEFAULT_SCORES_FILE};
