//! BlackJack console game library
//!
//! A single player plays rounds against a bank whose total is dealt up front.
//! Results are kept on a JSON leaderboard next to the game.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │   session       │────▶│  game::Round     │────▶│  rng            │
//! │ (menu, prompts) │     │ (totals, rules)  │     │ (card values)   │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!         │
//!         ├──────────────▶ store   (scores.json leaderboard)
//!         └──────────────▶ display (plain-text screens)
//! ```
//!
//! # Modules
//!
//! - [`game`] - Round state and win/lose/tie rules
//! - [`store`] - Leaderboard persistence
//! - [`session`] - Interactive menu and game loop
//! - [`display`] - Text rendering
//! - [`rng`] - Injectable random source
//! - [`error`] - Error types

pub mod display;
pub mod error;
pub mod game;
pub mod rng;
pub mod session;
pub mod store;

pub use error::{BlackjackError, BlackjackResult};
pub use game::{Outcome, Round, Winner};
pub use rng::{RandomSource, RngSource};
pub use session::{Session, SessionStats};
pub use store::{sorted_view, Leaderboard, ScoreRecord, ScoreStore};
