//! Interactive session
//!
//! Drives the menu, the rounds and the leaderboard from lines of player input.
//! Every prompt is one iteration of an explicit loop; invalid answers print a
//! warning and ask again. End of input at any prompt ends the session the same
//! way `q` does.

use crate::display;
use crate::error::{BlackjackError, BlackjackResult};
use crate::game::Round;
use crate::rng::RandomSource;
use crate::session::prompt::{parse_yes_no, MenuChoice};
use crate::store::{sorted_view, ScoreRecord, ScoreStore};
use log::{debug, error, info, warn};
use std::io::{BufRead, Write};

/// Counters for one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_saved: usize,
}

/// Where to go after a sub-screen returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

/// A game session over some input, output, card source and leaderboard
pub struct Session<I, O, S> {
    input: I,
    output: O,
    rng: S,
    store: ScoreStore,
    stats: SessionStats,
}

impl<I: BufRead, O: Write, S: RandomSource> Session<I, O, S> {
    pub fn new(input: I, output: O, rng: S, store: ScoreStore) -> Self {
        Self {
            input,
            output,
            rng,
            store,
            stats: SessionStats::default(),
        }
    }

    /// Run until the player quits or input ends
    pub fn run(&mut self) -> BlackjackResult<SessionStats> {
        info!("Session started, leaderboard at {:?}", self.store.path());
        display::title_screen(&mut self.output)?;

        loop {
            let Some(answer) = self.prompt("\nChoose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Ok(MenuChoice::Play) => self.play()?,
                Ok(MenuChoice::Leaderboard) => self.show_leaderboard()?,
                Ok(MenuChoice::Reset) => self.reset_leaderboard()?,
                Ok(MenuChoice::Quit) => Flow::Exit,
                Err(e) => {
                    debug!("{}", e);
                    display::info(&mut self.output, "Invalid option! ... Try again ...")?;
                    Flow::Menu
                }
            };

            if flow == Flow::Exit {
                break;
            }
            display::title_screen(&mut self.output)?;
        }

        display::goodbye(&mut self.output)?;
        self.output.flush()?;
        info!(
            "Session ended: {} rounds played, {} saved",
            self.stats.rounds_played, self.stats.rounds_saved
        );
        Ok(self.stats.clone())
    }

    /// Rounds until the player declines a retry
    fn play(&mut self) -> BlackjackResult<Flow> {
        loop {
            let Some(round) = self.deal_round()? else {
                return Ok(Flow::Exit);
            };
            let Some(round) = self.play_round(round)? else {
                return Ok(Flow::Exit);
            };

            self.stats.rounds_played += 1;
            self.save(&round)?;

            match self.ask_yes_no("\nDo you want to play again? (y/n) ")? {
                Some(true) => continue,
                Some(false) => return Ok(Flow::Menu),
                None => return Ok(Flow::Exit),
            }
        }
    }

    /// Ask for a name until one is accepted, then deal
    fn deal_round(&mut self) -> BlackjackResult<Option<Round>> {
        loop {
            let Some(name) = self.prompt("\nEnter your name: ")? else {
                return Ok(None);
            };
            match Round::start(&name, &mut self.rng) {
                Ok(round) => {
                    display::round_started(&mut self.output, &round)?;
                    return Ok(Some(round));
                }
                Err(BlackjackError::EmptyName) => {
                    display::warning(&mut self.output, "Please enter a name!")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Hit/stand loop. Returns the finished round, or `None` if input ended
    /// mid-round.
    fn play_round(&mut self, mut round: Round) -> BlackjackResult<Option<Round>> {
        while !round.must_settle() {
            match self.ask_yes_no("\nDo you want another card? (y/n) ")? {
                Some(true) => {
                    if let Some(card) = round.draw_card(&mut self.rng) {
                        display::card_drawn(&mut self.output, card, round.player_total())?;
                    }
                }
                Some(false) => break,
                None => {
                    warn!("Input ended during a round, round not saved");
                    return Ok(None);
                }
            }
        }

        round.finish();
        display::round_result(&mut self.output, &round)?;
        Ok(Some(round))
    }

    fn save(&mut self, round: &Round) -> BlackjackResult<()> {
        match self.store.append(ScoreRecord::now(round)) {
            Ok(()) => {
                self.stats.rounds_saved += 1;
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                error!("Score not saved: {}", e);
                display::error(&mut self.output, &format!("Score not saved: {}", e))
                    .map_err(Into::into)
            }
            Err(e) => Err(e),
        }
    }

    fn show_leaderboard(&mut self) -> BlackjackResult<Flow> {
        let scores = match self.store.load() {
            Ok(scores) => scores,
            Err(e) if e.is_recoverable() => {
                error!("Cannot show leaderboard: {}", e);
                display::error(&mut self.output, &e.to_string())?;
                return Ok(Flow::Menu);
            }
            Err(e) => return Err(e),
        };

        if scores.is_empty() {
            display::warning(&mut self.output, "No scores available!")?;
            return Ok(Flow::Menu);
        }

        display::leaderboard(&mut self.output, &sorted_view(&scores))?;
        match self.prompt("\nPress Enter to continue ...")? {
            Some(_) => Ok(Flow::Menu),
            None => Ok(Flow::Exit),
        }
    }

    fn reset_leaderboard(&mut self) -> BlackjackResult<Flow> {
        // A corrupt file can still be cleared, so it counts as having scores
        let has_scores = match self.store.has_scores() {
            Ok(has) => has,
            Err(BlackjackError::CorruptStore { .. }) => true,
            Err(e) => return Err(e),
        };
        if !has_scores {
            display::warning(&mut self.output, "No scores available!")?;
            return Ok(Flow::Menu);
        }

        match self.ask_yes_no("\nAre you sure you want to reset the leaderboard? (y/n) ")? {
            Some(true) => {
                self.store.reset()?;
                display::success(&mut self.output, "Leaderboard cleared!")?;
                Ok(Flow::Menu)
            }
            Some(false) => {
                display::info(&mut self.output, "No changes were made!")?;
                Ok(Flow::Menu)
            }
            None => Ok(Flow::Exit),
        }
    }

    /// Ask until a y/n answer arrives. `None` when input ends.
    fn ask_yes_no(&mut self, question: &str) -> BlackjackResult<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer) {
                Ok(yes) => return Ok(Some(yes)),
                Err(e) => {
                    debug!("{}", e);
                    display::info(&mut self.output, "Invalid option! ... Use 'y' or 'n'")?;
                }
            }
        }
    }

    /// Print `question` and read one line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> BlackjackResult<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
