//! TUI application state and logic

use super::theme::Theme;
use crate::core::{COLS, Position, ROWS};
use crate::game::{GameSession, SessionError};
use crate::morph::MorphAnalyzer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, warn};

const TICK_RATE: Duration = Duration::from_secs(1);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<A> {
    pub session: GameSession<A>,
    pub cursor: Position,
    pub theme: Theme,
    pub view: View,
    /// Sorted dictionary snapshot, refreshed when the dictionary view opens
    pub dictionary: Vec<String>,
    pub dictionary_scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Game,
    Dictionary,
    Rules,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<A: MorphAnalyzer> App<A> {
    #[must_use]
    pub fn new(session: GameSession<A>, theme: Theme) -> Self {
        Self {
            session,
            cursor: Position::new(0, 0),
            theme,
            view: View::Game,
            dictionary: Vec::new(),
            dictionary_scroll: 0,
            messages: vec![Message {
                text: "Press 's' to start the clock, type letters or use arrows + Space."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Advance the game clock
    pub fn on_tick(&mut self) {
        self.session.tick();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.view {
            View::Game => self.handle_game_key(key),
            View::Dictionary => match key.code {
                KeyCode::Esc | KeyCode::Char('d' | 'q') => self.view = View::Game,
                KeyCode::Up => self.dictionary_scroll = self.dictionary_scroll.saturating_sub(1),
                KeyCode::Down => {
                    if self.dictionary_scroll + 1 < self.dictionary.len() {
                        self.dictionary_scroll += 1;
                    }
                }
                KeyCode::Char('t') => self.theme.toggle(),
                _ => {}
            },
            View::Rules => match key.code {
                KeyCode::Esc | KeyCode::Char('h' | 'q') => self.view = View::Game,
                KeyCode::Char('t') => self.theme.toggle(),
                _ => {}
            },
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('s') => self.start_game(),
            KeyCode::Char('d') => self.open_dictionary(),
            KeyCode::Char('h' | '?') => self.view = View::Rules,
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') => self.select_at_cursor(),
            KeyCode::Char(c) if c.is_alphabetic() && !c.is_ascii() => self.select_char(c),
            KeyCode::Backspace => {
                if self.session.remove_last_letter().is_none() {
                    self.add_message("Nothing to remove!", MessageStyle::Error);
                }
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn start_game(&mut self) {
        if self.session.start_game() {
            self.add_message("Game started! The clock is running.", MessageStyle::Info);
        } else {
            self.add_message("Game already running.", MessageStyle::Info);
        }
    }

    fn open_dictionary(&mut self) {
        match self.session.store().list_sorted() {
            Ok(words) => self.dictionary = words,
            Err(e) => {
                warn!("failed to read dictionary: {e}");
                self.dictionary.clear();
                self.add_message(&format!("Cannot read dictionary: {e}"), MessageStyle::Error);
            }
        }
        self.dictionary_scroll = 0;
        self.view = View::Dictionary;
    }

    /// Move the cursor, clamped to the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row.saturating_add_signed(d_row).min(ROWS - 1);
        let col = self.cursor.col.saturating_add_signed(d_col).min(COLS - 1);
        self.cursor = Position::new(row, col);
    }

    fn select_at_cursor(&mut self) {
        match self.session.select_letter(self.cursor) {
            Ok(true) => {}
            Ok(false) => self.add_message("Letter already picked.", MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn select_char(&mut self, letter: char) {
        match self.session.select_char(letter) {
            Ok(true) => {
                if let Some(pos) = self.session.grid().find(letter) {
                    self.cursor = pos;
                }
            }
            Ok(false) => self.add_message(
                &format!("'{}' is not on the grid or already picked.", letter.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        match self.session.submit_word() {
            Ok(outcome) if outcome.accepted() => {
                let text = format!(
                    "'{}' accepted! +{} points",
                    outcome.word().to_uppercase(),
                    outcome.points
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Ok(outcome) => {
                let text = format!("'{}' is not a word!", outcome.word().to_uppercase());
                self.add_message(&text, MessageStyle::Error);
            }
            Err(SessionError::EmptySelection) => {
                self.add_message("Pick some letters first!", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored before a loop
/// error is returned.
pub fn run_tui<A: MorphAnalyzer>(app: App<A>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("tui loop failed: {err}");
    }
    res
}

fn run_app<A, B>(terminal: &mut Terminal<B>, mut app: App<A>) -> Result<()>
where
    A: MorphAnalyzer,
    B: ratatui::backend::Backend,
{
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterGrid;
    use crate::dictionary::DictionaryStore;
    use crate::morph::{LexiconAnalyzer, WordValidator};
    use tempfile::{TempDir, tempdir};

    fn test_app() -> (App<LexiconAnalyzer>, TempDir) {
        let dir = tempdir().unwrap();
        let analyzer = LexiconAnalyzer::from_lines(["кот кот NOUN", "сок сок NOUN"]).unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        let session = GameSession::new(LetterGrid::default(), WordValidator::new(analyzer), store);
        (App::new(session, Theme::dark()), dir)
    }

    fn press(app: &mut App<LexiconAnalyzer>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<LexiconAnalyzer>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_enter_scores() {
        let (mut app, _dir) = test_app();
        press(&mut app, KeyCode::Char('s'));
        type_word(&mut app, "кот");
        assert_eq!(app.session.selection().word(), "кот");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.score(), 3);
        assert!(app.session.selection().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn cursor_selection_with_space() {
        let (mut app, _dir) = test_app();
        // К sits at row 1, column 4
        press(&mut app, KeyCode::Down);
        for _ in 0..4 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, Position::new(1, 4));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.selection().word(), "к");
    }

    #[test]
    fn cursor_is_clamped() {
        let (mut app, _dir) = test_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Position::new(0, 0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, Position::new(ROWS - 1, COLS - 1));
    }

    #[test]
    fn empty_submit_reports_error() {
        let (mut app, _dir) = test_app();
        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("Pick some letters"));
    }

    #[test]
    fn backspace_removes_last_letter() {
        let (mut app, _dir) = test_app();
        type_word(&mut app, "кота");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.selection().word(), "кот");
    }

    #[test]
    fn views_and_theme() {
        let (mut app, _dir) = test_app();
        type_word(&mut app, "сок");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.view, View::Dictionary);
        assert_eq!(app.dictionary, vec!["Сок"]);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Game);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.view, View::Rules);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.view, View::Game);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::light());
    }

    #[test]
    fn quit_keys() {
        let (mut app, _dir) = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let (mut app, _dir) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let (mut app, _dir) = test_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
