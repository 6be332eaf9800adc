//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Reads one command per line.

use crate::core::{COLS, Position, ROWS};
use crate::dictionary::DictionaryStore;
use crate::game::{GameSession, SessionError};
use crate::morph::MorphAnalyzer;
use crate::output::formatters::{RULES, format_elapsed, format_grid, grid_header};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Empty,
    Start,
    /// 1-based row and column converted to a grid position
    Select(Position),
    /// Letters picked by value
    Letters(String),
    Back,
    Submit,
    Dictionary,
    Grid,
    Rules,
    Quit,
    Unknown(String),
}

/// Parse one input line
#[must_use]
pub fn parse_command(line: &str) -> SimpleCommand {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "" => SimpleCommand::Empty,
        "start" | "s" => SimpleCommand::Start,
        "check" | "c" | "ok" => SimpleCommand::Submit,
        "back" | "b" | "-" => SimpleCommand::Back,
        "dict" | "d" => SimpleCommand::Dictionary,
        "grid" | "g" => SimpleCommand::Grid,
        "rules" | "help" | "h" | "?" => SimpleCommand::Rules,
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        _ => parse_coordinates(&input)
            .map(SimpleCommand::Select)
            .unwrap_or_else(|| {
                if input.chars().all(char::is_alphabetic) {
                    SimpleCommand::Letters(input.clone())
                } else {
                    SimpleCommand::Unknown(input.clone())
                }
            }),
    }
}

fn parse_coordinates(input: &str) -> Option<Position> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some(Position::new(row - 1, col - 1))
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<A: MorphAnalyzer>(session: &mut GameSession<A>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock(), io::stdout())
}

/// Run the simple mode over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<A, R, W>(session: &mut GameSession<A>, input: R, mut out: W) -> Result<()>
where
    A: MorphAnalyzer,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Word Grid - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type letters (e.g. 'кот') or 'row col' (e.g. '2 5') to pick.")?;
    writeln!(
        out,
        "Commands: start, check, back, grid, dict, rules, quit\n"
    )?;
    write_grid(&mut out, session)?;

    for line in input.lines() {
        let line = line?;
        session.tick();

        match parse_command(&line) {
            SimpleCommand::Quit => break,
            SimpleCommand::Empty => {}
            SimpleCommand::Start => {
                if session.start_game() {
                    writeln!(out, "⏱  Game started! The clock is running.")?;
                } else {
                    writeln!(out, "Game already running.")?;
                }
            }
            SimpleCommand::Select(pos) => match session.select_letter(pos) {
                Ok(true) => {}
                Ok(false) => writeln!(out, "Letter already picked.")?,
                Err(_) => writeln!(
                    out,
                    "❌ Rows are 1-{ROWS} and columns are 1-{COLS}."
                )?,
            },
            SimpleCommand::Letters(letters) => {
                for letter in letters.chars() {
                    if !session.select_char(letter).unwrap_or(false) {
                        writeln!(
                            out,
                            "'{}' is not on the grid or already picked.",
                            letter.to_uppercase()
                        )?;
                    }
                }
            }
            SimpleCommand::Back => {
                if session.remove_last_letter().is_none() {
                    writeln!(out, "Nothing to remove!")?;
                }
            }
            SimpleCommand::Submit => write_submit(&mut out, session)?,
            SimpleCommand::Dictionary => write_dictionary(&mut out, session.store())?,
            SimpleCommand::Grid => write_grid(&mut out, session)?,
            SimpleCommand::Rules => {
                for rule in RULES {
                    writeln!(out, "  {rule}")?;
                }
            }
            SimpleCommand::Unknown(text) => {
                writeln!(out, "Unknown command '{text}'. Type 'help' for rules.")?;
            }
        }

        write_status(&mut out, session)?;
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Final score: {}\n",
        session.score().to_string().bright_yellow().bold()
    )?;
    Ok(())
}

fn write_submit<A: MorphAnalyzer, W: Write>(out: &mut W, session: &mut GameSession<A>) -> Result<()> {
    match session.submit_word() {
        Ok(outcome) if outcome.accepted() => writeln!(
            out,
            "{}",
            format!(
                "✅ '{}' accepted! +{} points",
                outcome.word(),
                outcome.points
            )
            .green()
            .bold()
        )?,
        Ok(outcome) => writeln!(
            out,
            "{}",
            format!("❌ '{}' is not a word!", outcome.word()).red()
        )?,
        Err(SessionError::EmptySelection) => writeln!(out, "⚠  Pick some letters first!")?,
        Err(e) => writeln!(out, "❌ {e}")?,
    }
    Ok(())
}

fn write_dictionary<W: Write>(out: &mut W, store: &DictionaryStore) -> Result<()> {
    let words = match store.list_sorted() {
        Ok(words) => words,
        Err(e) => {
            writeln!(out, "{}", format!("❌ Cannot read dictionary: {e}").red())?;
            return Ok(());
        }
    };
    if words.is_empty() {
        writeln!(out, "Dictionary is empty")?;
    } else {
        for word in words {
            writeln!(out, "  {word}")?;
        }
    }
    Ok(())
}

fn write_grid<A: MorphAnalyzer, W: Write>(out: &mut W, session: &GameSession<A>) -> Result<()> {
    writeln!(out, "   {}", grid_header())?;
    for (i, line) in format_grid(session.grid(), session.selection())
        .lines()
        .enumerate()
    {
        writeln!(out, " {} {line}", i + 1)?;
    }
    Ok(())
}

fn write_status<A: MorphAnalyzer, W: Write>(out: &mut W, session: &GameSession<A>) -> Result<()> {
    let time = if session.is_running() {
        format_elapsed(session.elapsed_seconds())
    } else {
        "not started".to_string()
    };
    writeln!(
        out,
        "────────────────────────────────────────────────────────────\n\
         Word: {:<20} Score: {:<6} Time: {time}",
        session.selection().spaced(),
        session.score()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterGrid;
    use crate::morph::{LexiconAnalyzer, WordValidator};
    use tempfile::{TempDir, tempdir};

    fn session() -> (GameSession<LexiconAnalyzer>, TempDir) {
        let dir = tempdir().unwrap();
        let analyzer = LexiconAnalyzer::from_lines(["кот кот NOUN", "сок сок NOUN"]).unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        (
            GameSession::new(LetterGrid::default(), WordValidator::new(analyzer), store),
            dir,
        )
    }

    fn play(session: &mut GameSession<LexiconAnalyzer>, script: &str) -> String {
        let mut out = Vec::new();
        run_simple_with(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("  START "), SimpleCommand::Start);
        assert_eq!(parse_command("c"), SimpleCommand::Submit);
        assert_eq!(parse_command("-"), SimpleCommand::Back);
        assert_eq!(parse_command("q"), SimpleCommand::Quit);
        assert_eq!(parse_command(""), SimpleCommand::Empty);
    }

    #[test]
    fn parse_coordinates_are_one_based() {
        assert_eq!(
            parse_command("2 5"),
            SimpleCommand::Select(Position::new(1, 4))
        );
        assert!(matches!(parse_command("0 1"), SimpleCommand::Unknown(_)));
        assert!(matches!(parse_command("1 2 3"), SimpleCommand::Unknown(_)));
    }

    #[test]
    fn parse_letters() {
        assert_eq!(
            parse_command("КОТ"),
            SimpleCommand::Letters("кот".to_string())
        );
        assert!(matches!(parse_command("к1"), SimpleCommand::Unknown(_)));
    }

    #[test]
    fn script_scores_word() {
        let (mut session, _dir) = session();
        let output = play(&mut session, "start\nкот\ncheck\nq\n");

        assert!(output.contains("accepted"));
        assert_eq!(session.score(), 3);
        assert!(session.is_running());
        assert_eq!(session.store().list_all().unwrap(), vec!["кот"]);
    }

    #[test]
    fn script_picks_by_coordinates() {
        let (mut session, _dir) = session();
        play(&mut session, "2 5\n3 3\n4 1\nok\n");
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn script_reports_empty_submit() {
        let (mut session, _dir) = session();
        let output = play(&mut session, "check\n");
        assert!(output.contains("Pick some letters first"));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn script_rejects_unknown_word() {
        let (mut session, _dir) = session();
        let output = play(&mut session, "бвг\ncheck\n");
        assert!(output.contains("is not a word"));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn script_back_removes_letter() {
        let (mut session, _dir) = session();
        play(&mut session, "кота\nback\n");
        assert_eq!(session.selection().word(), "кот");
    }

    #[test]
    fn script_lists_dictionary() {
        let (mut session, _dir) = session();
        let output = play(&mut session, "dict\nсок\nc\ndict\n");
        assert!(output.contains("Dictionary is empty"));
        assert!(output.contains("Сок"));
    }

    #[test]
    fn script_survives_unreadable_dictionary() {
        let dir = tempdir().unwrap();
        let analyzer = LexiconAnalyzer::from_lines(["кот кот NOUN", "сок сок NOUN"]).unwrap();
        let store = DictionaryStore::new(dir.path());
        let mut session = GameSession::new(LetterGrid::default(), WordValidator::new(analyzer), store);

        let output = play(&mut session, "кот\ncheck\ndict\nсок\ncheck\nq\n");

        assert!(output.contains("Cannot read dictionary"));
        assert_eq!(session.score(), 6);
        assert!(output.contains("Thanks for playing"));
    }
}
