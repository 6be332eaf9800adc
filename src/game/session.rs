//! Game session state
//!
//! Ties the grid, the selection, the validator and the dictionary store
//! together. The session moves from `NotStarted` to `Running` once and never
//! pauses or finishes; letter selection is allowed in either state.

use crate::core::{GridError, LetterGrid, Position, Selection};
use crate::dictionary::DictionaryStore;
use crate::morph::{MorphAnalyzer, Verdict, WordValidator};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no letters selected")]
    EmptySelection,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Timer state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running { started_at: Instant },
}

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    /// Points awarded, 0 when rejected
    pub points: u32,
    /// Whether the word was newly written to the dictionary file
    pub stored: bool,
}

impl SubmitOutcome {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.verdict.accepted
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.verdict.word
    }
}

/// One player's game
#[derive(Debug)]
pub struct GameSession<A> {
    grid: LetterGrid,
    selection: Selection,
    validator: WordValidator<A>,
    store: DictionaryStore,
    state: SessionState,
    score: u32,
    elapsed_seconds: u64,
    accepted: Vec<String>,
}

impl<A: MorphAnalyzer> GameSession<A> {
    #[must_use]
    pub fn new(grid: LetterGrid, validator: WordValidator<A>, store: DictionaryStore) -> Self {
        Self {
            grid,
            selection: Selection::new(),
            validator,
            store,
            state: SessionState::NotStarted,
            score: 0,
            elapsed_seconds: 0,
            accepted: Vec::new(),
        }
    }

    /// Start the timer now
    ///
    /// Returns `false` if the game was already running.
    pub fn start_game(&mut self) -> bool {
        self.start_game_at(Instant::now())
    }

    /// Start the timer at a given instant
    pub fn start_game_at(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = SessionState::Running { started_at: now };
        self.elapsed_seconds = 0;
        info!("game started");
        true
    }

    /// Refresh the elapsed time from the wall clock
    pub fn tick(&mut self) -> u64 {
        self.tick_at(Instant::now())
    }

    /// Refresh the elapsed time as of `now`
    ///
    /// Does nothing before the game starts.
    pub fn tick_at(&mut self, now: Instant) -> u64 {
        if let SessionState::Running { started_at } = self.state {
            self.elapsed_seconds = now.saturating_duration_since(started_at).as_secs();
        }
        self.elapsed_seconds
    }

    /// Pick the letter at `pos`
    ///
    /// Returns `Ok(false)` if that letter is already selected.
    ///
    /// # Errors
    /// Returns `SessionError::Grid` if the position is outside the grid.
    pub fn select_letter(&mut self, pos: Position) -> Result<bool, SessionError> {
        let letter = self.grid.letter_at(pos)?;
        Ok(self.selection.push(letter, pos))
    }

    /// Pick a letter by value, wherever it sits in the grid
    ///
    /// Returns `Ok(false)` if the letter is not on the grid or already selected.
    ///
    /// # Errors
    /// Only fails if the grid reports an inconsistent position.
    pub fn select_char(&mut self, letter: char) -> Result<bool, SessionError> {
        match self.grid.find(letter) {
            Some(pos) => self.select_letter(pos),
            None => Ok(false),
        }
    }

    /// Drop the most recently picked letter
    pub fn remove_last_letter(&mut self) -> Option<char> {
        self.selection.pop().map(|pick| pick.letter)
    }

    /// Validate the current selection and score it
    ///
    /// The selection is cleared whether or not the word is accepted. Failing
    /// to persist an accepted word is logged and does not undo the score.
    ///
    /// # Errors
    /// Returns `SessionError::EmptySelection` if nothing is selected; the
    /// session is left unchanged.
    pub fn submit_word(&mut self) -> Result<SubmitOutcome, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let word = self.selection.word();
        self.selection.clear();

        let verdict = self.validator.verdict(&word);
        if !verdict.accepted {
            info!(word = %word, "word rejected");
            return Ok(SubmitOutcome {
                verdict,
                points: 0,
                stored: false,
            });
        }

        let points = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
        self.score = self.score.saturating_add(points);
        self.accepted.push(word.clone());

        let stored = match self.store.add_if_absent(&word) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("failed to save '{word}' to dictionary: {e}");
                false
            }
        };

        info!(word = %word, points, score = self.score, "word accepted");
        Ok(SubmitOutcome {
            verdict,
            points,
            stored,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn validator(&self) -> &WordValidator<A> {
        &self.validator
    }

    #[must_use]
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Words accepted this session, in order, including repeats
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }
}
