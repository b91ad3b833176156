//! A single round against the bank
//!
//! The bank's total is fixed when the round starts; only the player draws.
//! Deciding the round goes through an explicit rule chain (see
//! [`Round::verdict`]) rather than a plain comparison of totals, which is why
//! a player reaching exactly 21 wins even against a bank sitting on 21.

use crate::error::{BlackjackError, BlackjackResult};
use crate::rng::RandomSource;
use log::{debug, trace};

/// Target total
pub const BLACKJACK: u32 = 21;

/// Inclusive range of the bank's dealt total
pub const BANK_RANGE: (u32, u32) = (16, 21);

/// Inclusive range of one card, also the player's opening total
pub const CARD_RANGE: (u32, u32) = (1, 11);

/// State of a round as seen by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    PlayerWin,
    BankWin,
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Which rule of the chain decided the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Player sits on exactly 21
    PlayerBlackjack,
    /// Player went over 21
    PlayerBust,
    /// Bank sits on exactly 21
    BankBlackjack,
    PlayerHigher,
    BankHigher,
    Even,
}

impl Verdict {
    pub fn outcome(self) -> Outcome {
        match self {
            Verdict::PlayerBlackjack | Verdict::PlayerHigher => Outcome::PlayerWin,
            Verdict::PlayerBust | Verdict::BankBlackjack | Verdict::BankHigher => {
                Outcome::BankWin
            }
            Verdict::Even => Outcome::Tie,
        }
    }

    /// Announcement shown when the round ends
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::PlayerBlackjack => "BlackJack! Player wins!",
            Verdict::PlayerBust => "Busted! Player loses!",
            Verdict::BankBlackjack => "BlackJack! Bank wins!",
            Verdict::PlayerHigher => "Player wins!",
            Verdict::BankHigher => "Bank wins!",
            Verdict::Even => "Tie!",
        }
    }
}

/// Winner as written to the leaderboard
///
/// Computed from the totals with its own table, so it does not always agree
/// with [`Round::evaluate`]: both sides on 21 evaluates to a player win but is
/// recorded as a tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Player(String),
    Bank,
    Tie,
    NoWinner,
}

impl Winner {
    /// Label stored in the `winner` field of a score record
    pub fn label(&self) -> &str {
        match self {
            Winner::Player(name) => name,
            Winner::Bank => "Bank",
            Winner::Tie => "Tie",
            Winner::NoWinner => "No winner",
        }
    }
}

/// One round: who is playing, both totals, and how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player_name: String,
    player_total: u32,
    bank_total: u32,
    outcome: Outcome,
}

impl Round {
    /// Deal a new round for `player_name`
    ///
    /// The bank is dealt first, then the player's opening card. Names are
    /// trimmed; an empty name is rejected.
    pub fn start<S: RandomSource + ?Sized>(
        player_name: &str,
        rng: &mut S,
    ) -> BlackjackResult<Self> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(BlackjackError::EmptyName);
        }

        let bank_total = rng.random_in_range(BANK_RANGE.0, BANK_RANGE.1);
        let player_total = rng.random_in_range(CARD_RANGE.0, CARD_RANGE.1);
        debug!(
            "New round for {}: player {}, bank {}",
            player_name, player_total, bank_total
        );

        Ok(Self {
            player_name: player_name.to_string(),
            player_total,
            bank_total,
            outcome: Outcome::InProgress,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_totals(player_name: &str, player_total: u32, bank_total: u32) -> Self {
        Self {
            player_name: player_name.to_string(),
            player_total,
            bank_total,
            outcome: Outcome::InProgress,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn player_total(&self) -> u32 {
        self.player_total
    }

    pub fn bank_total(&self) -> u32 {
        self.bank_total
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Hit: add one card to the player's total
    ///
    /// Returns the drawn value, or `None` once the round is finished.
    pub fn draw_card<S: RandomSource + ?Sized>(&mut self, rng: &mut S) -> Option<u32> {
        if self.is_finished() {
            trace!("Ignoring draw on finished round");
            return None;
        }
        let card = rng.random_in_range(CARD_RANGE.0, CARD_RANGE.1);
        self.player_total += card;
        debug!("{} drew {} (total {})", self.player_name, card, self.player_total);
        Some(card)
    }

    /// True once either side has reached or passed 21 and no more decisions
    /// are possible
    pub fn must_settle(&self) -> bool {
        self.player_total >= BLACKJACK || self.bank_total >= BLACKJACK
    }

    /// Rule chain deciding the round, first match wins
    pub fn verdict(&self) -> Verdict {
        let (player, bank) = (self.player_total, self.bank_total);
        if player == BLACKJACK {
            Verdict::PlayerBlackjack
        } else if player > BLACKJACK {
            Verdict::PlayerBust
        } else if bank == BLACKJACK {
            Verdict::BankBlackjack
        } else if player > bank {
            Verdict::PlayerHigher
        } else if bank > player {
            Verdict::BankHigher
        } else {
            Verdict::Even
        }
    }

    /// Outcome the totals currently call for. Does not change the round.
    pub fn evaluate(&self) -> Outcome {
        self.verdict().outcome()
    }

    /// Stand (or settle): fix the outcome. A finished round keeps the outcome
    /// it already has.
    pub fn finish(&mut self) -> Outcome {
        if !self.is_finished() {
            self.outcome = self.evaluate();
            debug!("Round finished: {:?}", self.outcome);
        }
        self.outcome
    }

    /// Winner for the leaderboard record
    pub fn winner(&self) -> Winner {
        let (player, bank) = (self.player_total, self.bank_total);
        if player > BLACKJACK && bank > BLACKJACK {
            Winner::NoWinner
        } else if player > BLACKJACK {
            Winner::Bank
        } else if bank > BLACKJACK {
            Winner::Player(self.player_name.clone())
        } else if player == bank {
            Winner::Tie
        } else if player > bank {
            Winner::Player(self.player_name.clone())
        } else {
            Winner::Bank
        }
    }
}
