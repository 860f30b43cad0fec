//! The selection validator: decides whether a completed drag spells an
//! unfound target word.
//!
//! This is a pure predicate. It reads the selection, the grid, the round's
//! word list, and the already-found words, and reports the outcome; all
//! bookkeeping (recording the find, assigning a color, clearing the
//! selection) is the caller's job. Keeping the side effects out makes the
//! check testable in isolation.
//!
//! Matching is strictly forward: letters are concatenated in selection
//! order and compared as-is, so a word dragged back-to-front does not
//! match. There is no normalization for reversed selections.

use crate::grid::Grid;
use crate::selection::Selection;

/// Outcome of validating one completed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The selection spells a target word not yet found. The caller should
    /// record the word, its selection, and the next cyclic palette color.
    Found { word: String },

    /// Not a target word, or already found. The caller should discard the
    /// selection; this is a normal outcome, not an error.
    NoMatch,
}

/// Check whether `selection` spells a word from `words` that is not yet in
/// `found_words`.
///
/// Each index maps to its cell via `row = index / N`, `col = index % N`;
/// the letters are concatenated in selection order and uppercased before
/// comparison. An empty selection, or one containing an out-of-range
/// index, can never spell a target word and resolves to
/// [`MatchResult::NoMatch`].
#[must_use]
pub fn check_selection(
    selection: &Selection,
    grid: &Grid,
    words: &[String],
    found_words: &[&str],
) -> MatchResult {
    let mut candidate = String::with_capacity(selection.len());
    for &index in selection.indices() {
        match grid.letter_at(index) {
            Some(letter) => candidate.push(letter),
            None => return MatchResult::NoMatch,
        }
    }
    let candidate = candidate.to_uppercase();

    if words.iter().any(|w| *w == candidate) && !found_words.contains(&candidate.as_str()) {
        MatchResult::Found { word: candidate }
    } else {
        MatchResult::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, Placement};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> (crate::generator::Puzzle, Vec<String>) {
        let words = vec!["CAT".to_string()];
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = generate(&words, 5, &mut rng).unwrap();
        (puzzle, words)
    }

    fn select(indices: &[usize]) -> Selection {
        let mut selection = Selection::start(indices[0]);
        for &i in &indices[1..] {
            selection.extend(i);
        }
        selection
    }

    fn placed_indices(placement: &Placement, grid_size: usize) -> Vec<usize> {
        placement.cell_indices(grid_size)
    }

    #[test]
    fn test_forward_selection_matches() {
        let (puzzle, words) = fixture();
        let indices = placed_indices(&puzzle.placements[0], puzzle.grid.size());
        let result = check_selection(&select(&indices), &puzzle.grid, &words, &[]);
        assert_eq!(
            result,
            MatchResult::Found {
                word: "CAT".to_string()
            }
        );
    }

    #[test]
    fn test_reverse_selection_does_not_match() {
        let (puzzle, words) = fixture();
        let mut indices = placed_indices(&puzzle.placements[0], puzzle.grid.size());
        indices.reverse();
        let result = check_selection(&select(&indices), &puzzle.grid, &words, &[]);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_already_found_word_does_not_rematch() {
        let (puzzle, words) = fixture();
        let indices = placed_indices(&puzzle.placements[0], puzzle.grid.size());
        let result = check_selection(&select(&indices), &puzzle.grid, &words, &["CAT"]);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_single_cell_non_word_is_no_match() {
        let (puzzle, words) = fixture();
        let result = check_selection(&select(&[0]), &puzzle.grid, &words, &[]);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_empty_selection_is_no_match() {
        let (puzzle, words) = fixture();
        let selection = Selection::default();
        assert_eq!(
            check_selection(&selection, &puzzle.grid, &words, &[]),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_out_of_range_index_is_no_match() {
        let (puzzle, words) = fixture();
        let result = check_selection(&select(&[999]), &puzzle.grid, &words, &[]);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_validation_is_grid_content_based() {
        // Validation reads letters straight off the grid: any index
        // sequence whose letters spell a target word matches, even a
        // crooked one the generator would never produce.
        let mut grid = crate::grid::Grid::empty(3);
        grid.set(0, 0, 'C');
        grid.set(1, 1, 'A');
        grid.set(2, 0, 'T');
        let words = vec!["CAT".to_string()];

        let crooked = select(&[0, 4, 6]);
        assert_eq!(
            check_selection(&crooked, &grid, &words, &[]),
            MatchResult::Found {
                word: "CAT".to_string()
            }
        );
    }
}
