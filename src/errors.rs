//! Error types for puzzle generation and configuration, with error codes
//! and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `WordTooLong` (Word cannot fit in the grid at all)
//! - E002: `Unplaceable` (Placement retry budget exhausted)
//! - E003: `EmptyWordList` (Generation requested with no words)
//! - E004: `VocabularyTooSmall` (Not enough unique words to sample a round)
//! - E005: `EmptyPalette` (Palette constructed with no colors)
//! - E006: `WordListIo` (Vocabulary file could not be read)
//!
//! Selections that match nothing, or match an already-found word, are normal
//! "no match" outcomes and never surface here.

use std::io;

/// Unified error type for the puzzle pipeline.
///
/// This consolidates the error sources we encounter when loading a
/// vocabulary, sampling a round, or generating a grid, so that callers only
/// need to handle a single `Result<_, PuzzleError>`.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The word is longer than the grid dimension, so no orientation or
    /// start position could ever fit it. Rejected up front rather than
    /// burning the retry budget.
    #[error("word \"{word}\" ({len} letters) cannot fit in a {grid_size}x{grid_size} grid")]
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },

    /// The random placement search exhausted its attempt budget without
    /// finding a position where every required cell was still empty.
    #[error("could not place \"{word}\" after {attempts} attempts")]
    Unplaceable { word: String, attempts: usize },

    /// Generation was requested with an empty word list.
    #[error("word list is empty")]
    EmptyWordList,

    /// The vocabulary holds fewer unique words than the round needs.
    #[error("vocabulary has {available} unique words but {requested} were requested")]
    VocabularyTooSmall { available: usize, requested: usize },

    /// A palette needs at least one color for the cyclic assignment to be
    /// defined.
    #[error("palette has no colors")]
    EmptyPalette,

    /// The vocabulary file could not be read from disk.
    #[error("failed to read word list: {0}")]
    WordListIo(#[from] io::Error),
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::WordTooLong { .. } => "E001",
            PuzzleError::Unplaceable { .. } => "E002",
            PuzzleError::EmptyWordList => "E003",
            PuzzleError::VocabularyTooSmall { .. } => "E004",
            PuzzleError::EmptyPalette => "E005",
            PuzzleError::WordListIo(_) => "E006",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::WordTooLong { .. } => {
                Some("Use a larger grid, or drop words longer than the grid dimension")
            }
            PuzzleError::Unplaceable { .. } => {
                Some("The grid is too crowded for this word list; use a larger grid or fewer words")
            }
            PuzzleError::EmptyWordList => Some("Provide at least one word to place"),
            PuzzleError::VocabularyTooSmall { .. } => {
                Some("Add more words to the vocabulary, or lower the words-per-game count")
            }
            PuzzleError::EmptyPalette => Some("Provide at least one display color"),
            PuzzleError::WordListIo(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        if let Some(help_text) = self.help() {
            format!("{self} ({})\n{help_text}", self.code())
        } else {
            format!("{self} ({})", self.code())
        }
    }
}
