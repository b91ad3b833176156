//! Plain-text screens
//!
//! Everything the player sees goes through here. The game and the store only
//! hand over structured values ([`Round`], [`ScoreRecord`]); layout lives in
//! this module.

use crate::game::Round;
use crate::store::ScoreRecord;
use std::io::{self, Write};

const SCREEN_WIDTH: usize = 60;

/// Leaderboard columns: header and width
const COLUMNS: [(&str, usize); 5] = [
    ("Name", 15),
    ("Date", 25),
    ("Winner", 15),
    ("Player Score", 14),
    ("Bank Score", 12),
];

/// Title banner followed by the main menu
pub fn title_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(SCREEN_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", centered("BlackJack"))?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", centered("Welcome to BlackJack game in terminal."))?;
    writeln!(out, "{}", centered("Get as close to 21 as you can without going over!"))?;
    writeln!(out, "{}", centered("So, are you able to ..."))?;
    writeln!(out, "{}", centered("BEAT THE BANK!"))?;
    writeln!(out, "{}", centered("GLHF!"))?;
    writeln!(out, "{}", "-".repeat(SCREEN_WIDTH))?;
    writeln!(out, "{}", centered("Menu"))?;
    for entry in ["1. Play", "l. Leaderboard", "r. Reset leaderboard", "q. Exit"] {
        writeln!(out, "{}", centered(entry))?;
    }
    writeln!(out, "{}", rule)
}

pub fn goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(SCREEN_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", centered("GOODBYE"))?;
    writeln!(out, "{}", centered("Thank you for playing!"))?;
    writeln!(out, "{}", centered("See you next time!"))?;
    writeln!(out, "{}", rule)
}

pub fn info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n[i] {}\n", message)
}

pub fn success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n[ok] {}\n", message)
}

pub fn warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n[!] {}\n", message)
}

pub fn error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n[x] {}\n", message)
}

/// Greeting and opening total. The bank's total stays hidden.
pub fn round_started<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out, "\nHello, {}!", round.player_name())?;
    writeln!(out, "\nPlayer: {}", round.player_total())
}

pub fn card_drawn<W: Write>(out: &mut W, card: u32, total: u32) -> io::Result<()> {
    writeln!(out, "\nYou got: {}", card)?;
    writeln!(out, "\nYour total: {}", total)
}

/// Headline of a finished round and both totals
pub fn round_result<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out, "\n*** {} ***", round.verdict().headline())?;
    writeln!(
        out,
        "\nPlayer score: {} | Bank score: {}",
        round.player_total(),
        round.bank_total()
    )
}

/// Leaderboard table, rows in the order given
pub fn leaderboard<W: Write>(out: &mut W, scores: &[ScoreRecord]) -> io::Result<()> {
    writeln!(out, "\n------ Leaderboard ------\n")?;

    let separator = COLUMNS
        .iter()
        .map(|(_, width)| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+", separator);

    writeln!(out, "{}", separator)?;
    let header: Vec<String> = COLUMNS.iter().map(|(title, _)| title.to_string()).collect();
    writeln!(out, "{}", table_row(&header))?;
    writeln!(out, "{}", separator)?;

    for score in scores {
        let cells = [
            score.name.clone(),
            score.timestamp.clone(),
            score.winner_label.clone(),
            score.player_score.to_string(),
            score.bank_score.to_string(),
        ];
        writeln!(out, "{}", table_row(&cells))?;
    }

    writeln!(out, "{}", separator)
}

fn table_row(cells: &[String]) -> String {
    let row = cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| format!(" {:<width$} ", fit(cell, *width), width = *width))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", row)
}

/// Cut `text` to `width` characters, marking the cut with `…`
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = SCREEN_WIDTH)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Ann", 15), "Ann");
        assert_eq!(fit("abcdefghij", 5), "abcd…");
        assert_eq!(fit("abcde", 5), "abcde");
    }

    #[test]
    fn test_title_screen_lists_menu() {
        let text = render(|out| title_screen(out));
        for entry in ["1. Play", "l. Leaderboard", "r. Reset leaderboard", "q. Exit"] {
            assert!(text.contains(entry), "missing {}", entry);
        }
    }

    #[test]
    fn test_leaderboard_rows_aligned() {
        let scores = vec![ScoreRecord {
            name: "Ann".to_string(),
            timestamp: "1/2/2024, 3:04:05 PM".to_string(),
            winner_label: "Bank".to_string(),
            player_score: 17,
            bank_score: 19,
        }];
        let text = render(|out| leaderboard(out, &scores));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chars().count(), rows[1].chars().count());
        assert!(rows[1].contains("Ann"));
        assert!(rows[1].contains("Bank"));
    }

    #[test]
    fn test_round_result_shows_both_totals() {
        let round = Round::with_totals("Ann", 19, 18);
        let text = render(|out| round_result(out, &round));
        assert!(text.contains("Player wins!"));
        assert!(text.contains("Player score: 19 | Bank score: 18"));
    }
}
