//! Round engine

pub mod round;

pub use round::{Outcome, Round, Verdict, Winner, BANK_RANGE, BLACKJACK, CARD_RANGE};
