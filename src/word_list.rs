//! `word_list` — Module to load and preprocess the puzzle vocabulary.
//!
//! This module is responsible for reading a vocabulary (either from a file,
//! or from an in-memory string) and sampling the per-round word subset from
//! it.
//!
//! The parsing logic:
//! - Each line in the input is expected to hold a single word.
//! - Blank lines and lines starting with `#` are skipped silently.
//! - All words are normalized to uppercase, since the grid holds uppercase
//!   letters and the validator uppercases candidates before comparing.
//! - The final list is deduplicated and sorted alphabetically.
//!
//! Round sampling is uniform without replacement: every round gets
//! `words_per_game` distinct words, and which subset comes up depends only
//! on the injected random source, so a seeded generator reproduces the same
//! round exactly.

use crate::errors::PuzzleError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// A processed, ready-to-sample vocabulary.
///
/// The `words` vector contains all valid words (normalized, deduplicated,
/// sorted), each a candidate for inclusion in a round.
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of unique uppercase words.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw vocabulary from an in-memory string.
    ///
    /// # Behavior
    /// 1. Splits the input into lines and trims whitespace.
    /// 2. Skips empty lines and `#` comment lines.
    /// 3. Converts each word to uppercase.
    /// 4. Sorts alphabetically and deduplicates.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(line.to_uppercase())
                }
            })
            .collect();

        // sort + dedup rather than a HashSet: we want a deterministically
        // ordered Vec anyway, and dedup only removes adjacent duplicates
        words.sort();
        words.dedup();

        WordList { words }
    }

    /// Read and parse a vocabulary file from disk.
    ///
    /// # Errors
    /// Returns [`PuzzleError::WordListIo`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<WordList, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse_from_str(&contents))
    }

    /// Sample `count` distinct words uniformly without replacement.
    ///
    /// # Errors
    /// Returns [`PuzzleError::VocabularyTooSmall`] if the vocabulary holds
    /// fewer unique words than requested.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<String>, PuzzleError> {
        if self.words.len() < count {
            return Err(PuzzleError::VocabularyTooSmall {
                available: self.words.len(),
                requested: count,
            });
        }
        Ok(self.words.choose_multiple(rng, count).cloned().collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
