//! The session controller: owns the round state and wires gestures to the
//! validator.
//!
//! All per-round state (word list, grid, in-progress selection, found
//! entries, color index) lives in one [`RoundState`] owned exclusively by
//! the [`Session`]; `new_game` replaces it wholesale, so collaborators
//! never observe a partially reset round. The session also owns the random
//! source, so a seeded session reproduces its rounds bit-for-bit.
//!
//! Gesture flow per drag: `gesture_start` opens a selection over one cell,
//! `gesture_move` grows it, and `gesture_end` (or `gesture_abort`, when the
//! pointer leaves the board) runs the validator and applies its recipe —
//! on a match, record a [`FoundEntry`] with the next cyclic palette color
//! and fire the word-found hook; either way the drag ends Idle with an
//! empty selection.

use crate::errors::PuzzleError;
use crate::generator::{self, Placement, Puzzle};
use crate::grid::Grid;
use crate::palette::Palette;
use crate::selection::{DragState, Selection};
use crate::validator::{check_selection, MatchResult};
use crate::word_list::WordList;
use rand::Rng;
use serde::Serialize;
use std::mem;

/// Per-game constants: grid dimension, round size, display colors.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid_size: usize,
    pub words_per_game: usize,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            words_per_game: 12,
            palette: Palette::default(),
        }
    }
}

/// A validated find: the word, the exact selection that matched it, and its
/// assigned display color. Append-only for the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundEntry {
    pub word: String,
    pub selection: Selection,
    pub color: String,
}

/// Everything that belongs to one round. Replaced wholesale on `new_game`.
#[derive(Debug, Clone)]
struct RoundState {
    words: Vec<String>,
    puzzle: Puzzle,
    selection: Selection,
    found: Vec<FoundEntry>,
    next_color_index: usize,
}

/// Fire-and-forget observer invoked with each newly found word. Errors or
/// side effects inside the hook are not the session's concern.
type WordFoundHook = Box<dyn FnMut(&str)>;

/// Session controller for consecutive rounds over one vocabulary.
pub struct Session<R: Rng> {
    config: GameConfig,
    vocabulary: WordList,
    rng: R,
    round: RoundState,
    drag: DragState,
    on_word_found: Option<WordFoundHook>,
}

impl<R: Rng> std::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl<R: Rng> Session<R> {
    /// Create a session and generate its first round.
    ///
    /// # Errors
    /// Fails if the vocabulary cannot supply `words_per_game` unique words
    /// or the sampled words cannot be placed (see [`PuzzleError`]).
    pub fn new(config: GameConfig, vocabulary: WordList, rng: R) -> Result<Self, PuzzleError> {
        let mut session = Self {
            config,
            vocabulary,
            rng,
            round: RoundState {
                words: Vec::new(),
                puzzle: Puzzle {
                    grid: Grid::empty(0),
                    placements: Vec::new(),
                },
                selection: Selection::default(),
                found: Vec::new(),
                next_color_index: 0,
            },
            drag: DragState::Idle,
            on_word_found: None,
        };
        session.new_game()?;
        Ok(session)
    }

    /// Register the fire-and-forget "word found" observer (typically a
    /// sound or visual effect in the frontend).
    pub fn on_word_found(&mut self, hook: impl FnMut(&str) + 'static) {
        self.on_word_found = Some(Box::new(hook));
    }

    /// Start a fresh round: sample a new word subset, regenerate the grid,
    /// and discard all found-word state.
    ///
    /// # Errors
    /// See [`PuzzleError`]; on error the previous round is left untouched.
    pub fn new_game(&mut self) -> Result<(), PuzzleError> {
        let words = self
            .vocabulary
            .sample(&mut self.rng, self.config.words_per_game)?;
        let puzzle = generator::generate(&words, self.config.grid_size, &mut self.rng)?;
        log::info!(
            "new game: {} words on a {}x{} grid",
            words.len(),
            self.config.grid_size,
            self.config.grid_size
        );
        self.round = RoundState {
            words,
            puzzle,
            selection: Selection::default(),
            found: Vec::new(),
            next_color_index: 0,
        };
        self.drag = DragState::Idle;
        Ok(())
    }

    /// Gesture-start over a cell: begin dragging with a one-cell selection.
    pub fn gesture_start(&mut self, row: usize, col: usize) {
        self.drag = DragState::Dragging;
        self.round.selection = Selection::start(self.round.puzzle.grid.index_of(row, col));
    }

    /// Gesture-move over a cell. Ignored unless a drag is in flight;
    /// revisited cells are ignored by the selection itself.
    pub fn gesture_move(&mut self, row: usize, col: usize) {
        if self.drag == DragState::Dragging {
            let index = self.round.puzzle.grid.index_of(row, col);
            self.round.selection.extend(index);
        }
    }

    /// Gesture-end (pointer release): validate the selection and return to
    /// Idle with an empty selection.
    pub fn gesture_end(&mut self) -> MatchResult {
        self.drag = DragState::Idle;
        self.resolve_selection()
    }

    /// Gesture-abort (pointer left the board). Same resolution as
    /// [`Session::gesture_end`].
    pub fn gesture_abort(&mut self) -> MatchResult {
        self.drag = DragState::Idle;
        self.resolve_selection()
    }

    /// Run the validator over the current selection and apply its recipe.
    fn resolve_selection(&mut self) -> MatchResult {
        let result = {
            let found_words = self.found_words();
            check_selection(
                &self.round.selection,
                &self.round.puzzle.grid,
                &self.round.words,
                &found_words,
            )
        };

        match &result {
            MatchResult::Found { word } => {
                let color = self
                    .config
                    .palette
                    .color_for(self.round.next_color_index)
                    .to_string();
                let selection = mem::take(&mut self.round.selection);
                log::info!("found \"{word}\" ({}/{})", self.round.found.len() + 1, self.round.words.len());
                self.round.found.push(FoundEntry {
                    word: word.clone(),
                    selection,
                    color,
                });
                self.round.next_color_index += 1;
                if let Some(hook) = &mut self.on_word_found {
                    hook(word);
                }
            }
            MatchResult::NoMatch => {
                log::debug!("selection of {} cells matched nothing", self.round.selection.len());
                self.round.selection.clear();
            }
        }

        result
    }

    /// The target words for the current round, in sampled order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.round.words
    }

    /// The filled letter grid for the current round.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.round.puzzle.grid
    }

    /// Where each word was placed (solution data for rendering or tests).
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.round.puzzle.placements
    }

    /// The in-progress drag selection (empty while Idle).
    #[must_use]
    pub fn current_selection(&self) -> &Selection {
        &self.round.selection
    }

    /// All finds so far this round, in match order.
    #[must_use]
    pub fn found_entries(&self) -> &[FoundEntry] {
        &self.round.found
    }

    /// Derived view of the found words, in match order.
    #[must_use]
    pub fn found_words(&self) -> Vec<&str> {
        self.round.found.iter().map(|e| e.word.as_str()).collect()
    }

    /// True once every target word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.found.len() == self.round.words.len()
    }
}
