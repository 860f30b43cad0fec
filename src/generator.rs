//! The puzzle generator: places target words into the grid and fills the
//! rest with random letters.
//!
//! # Placement algorithm
//!
//! Placement is rejection sampling. For each word, in word-list order, we
//! repeatedly draw a uniform orientation (horizontal or vertical) and a
//! start position that keeps the word inside the grid for that orientation,
//! and accept the first draw where every required cell is still empty.
//! Overlap is never shared: a cell already holding a letter blocks the
//! candidate even when the incoming letter is identical. Two crossing words
//! therefore never intersect, which keeps validation purely grid-based.
//!
//! The retry loop is bounded. A word that still has no home after
//! [`MAX_PLACE_ATTEMPTS`] draws surfaces [`PuzzleError::Unplaceable`]
//! instead of spinning forever, and a word longer than the grid fails fast
//! with [`PuzzleError::WordTooLong`] since no draw could ever accept it.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordseek::generator;
//!
//! let words = vec!["CAT".to_string(), "DOG".to_string()];
//! let mut rng = StdRng::seed_from_u64(42);
//! let puzzle = generator::generate(&words, 10, &mut rng)?;
//!
//! assert_eq!(puzzle.placements.len(), 2);
//! println!("{}", puzzle.grid);
//! # Ok::<(), wordseek::errors::PuzzleError>(())
//! ```

use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::letters::{random_filler, EMPTY_MARKER};
use rand::Rng;
use serde::Serialize;

/// How many random (orientation, position) draws a single word gets before
/// generation gives up on the whole word list.
pub const MAX_PLACE_ATTEMPTS: usize = 10_000;

/// Placement direction for a word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Where a placed word sits: start cell plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Flat cell indices the word occupies, in reading order. This is the
    /// exact index sequence a correct drag over the word produces.
    #[must_use]
    pub fn cell_indices(&self, grid_size: usize) -> Vec<usize> {
        (0..self.word.chars().count())
            .map(|i| match self.orientation {
                Orientation::Horizontal => self.row * grid_size + self.col + i,
                Orientation::Vertical => (self.row + i) * grid_size + self.col,
            })
            .collect()
    }
}

/// A generated round: the filled grid plus where each word went.
///
/// Validation only needs the grid (it re-derives letters from cell
/// contents), but the placements are kept for solution output and tests.
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

/// Generate a filled `grid_size`×`grid_size` puzzle containing `words`.
///
/// Words are placed in the given order; remaining cells are then filled
/// with uniformly random uppercase letters, so the returned grid never
/// contains the empty sentinel.
///
/// # Errors
/// - [`PuzzleError::EmptyWordList`] if `words` is empty.
/// - [`PuzzleError::WordTooLong`] if any word exceeds `grid_size`.
/// - [`PuzzleError::Unplaceable`] if a word exhausts its retry budget.
pub fn generate<R: Rng + ?Sized>(
    words: &[String],
    grid_size: usize,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }

    let mut grid = Grid::empty(grid_size);
    let mut placements = Vec::with_capacity(words.len());

    for word in words {
        let placement = place_word(word, &mut grid, rng)?;
        placements.push(placement);
    }

    fill_empty_cells(&mut grid, rng);

    Ok(Puzzle { grid, placements })
}

/// Rejection-sample a placement for one word and write it into the grid.
fn place_word<R: Rng + ?Sized>(
    word: &str,
    grid: &mut Grid,
    rng: &mut R,
) -> Result<Placement, PuzzleError> {
    let len = word.chars().count();
    if len > grid.size() {
        return Err(PuzzleError::WordTooLong {
            word: word.to_string(),
            len,
            grid_size: grid.size(),
        });
    }

    for attempt in 1..=MAX_PLACE_ATTEMPTS {
        let orientation = Orientation::random(rng);
        // The start range narrows by the word length along the placement
        // axis so the word stays in bounds.
        let (row, col) = match orientation {
            Orientation::Horizontal => (
                random_start(rng, grid.size()),
                random_start(rng, grid.size() - len),
            ),
            Orientation::Vertical => (
                random_start(rng, grid.size() - len),
                random_start(rng, grid.size()),
            ),
        };

        if can_place_at(word, grid, row, col, orientation) {
            write_word(word, grid, row, col, orientation);
            log::debug!("placed {word} at ({row},{col}) {orientation:?} on attempt {attempt}");
            return Ok(Placement {
                word: word.to_string(),
                row,
                col,
                orientation,
            });
        }
    }

    Err(PuzzleError::Unplaceable {
        word: word.to_string(),
        attempts: MAX_PLACE_ATTEMPTS,
    })
}

/// Uniform draw from `0..span`; a zero span (word covers the whole
/// dimension) leaves only start 0.
fn random_start<R: Rng + ?Sized>(rng: &mut R, span: usize) -> usize {
    if span == 0 {
        0
    } else {
        rng.gen_range(0..span)
    }
}

/// A candidate fits only if every cell it would occupy still holds the
/// empty sentinel. Identical letters do NOT merge.
fn can_place_at(word: &str, grid: &Grid, row: usize, col: usize, orientation: Orientation) -> bool {
    (0..word.chars().count()).all(|i| match orientation {
        Orientation::Horizontal => grid.is_open(row, col + i),
        Orientation::Vertical => grid.is_open(row + i, col),
    })
}

fn write_word(word: &str, grid: &mut Grid, row: usize, col: usize, orientation: Orientation) {
    for (i, letter) in word.chars().enumerate() {
        match orientation {
            Orientation::Horizontal => grid.set(row, col + i, letter),
            Orientation::Vertical => grid.set(row + i, col, letter),
        }
    }
}

/// Overwrite every remaining sentinel cell with a random uppercase letter.
fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.get(row, col) == EMPTY_MARKER {
                grid.set(row, col, random_filler(rng));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    /// Read the letters along a placement straight off the grid.
    fn letters_at(puzzle: &Puzzle, placement: &Placement) -> String {
        placement
            .cell_indices(puzzle.grid.size())
            .iter()
            .map(|&i| puzzle.grid.letter_at(i).unwrap())
            .collect()
    }

    #[test]
    fn test_every_word_reads_forward_at_its_placement() {
        let list = words(&["HOSPITAL", "CRUCE", "CASCO", "PEATON"]);
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = generate(&list, 15, &mut rng).unwrap();

        assert_eq!(puzzle.placements.len(), list.len());
        for placement in &puzzle.placements {
            assert_eq!(letters_at(&puzzle, placement), placement.word);
        }
    }

    #[test]
    fn test_no_sentinel_cells_after_generation() {
        let list = words(&["CAT", "DOG"]);
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = generate(&list, 5, &mut rng).unwrap();
        assert!(puzzle.grid.cells().all(|c| c != EMPTY_MARKER));
    }

    #[test]
    fn test_placements_stay_in_bounds() {
        let list = words(&["VELOCIDAD", "SEMAFORO", "CINTURON"]);
        let mut rng = StdRng::seed_from_u64(21);
        let puzzle = generate(&list, 10, &mut rng).unwrap();
        for placement in &puzzle.placements {
            let len = placement.word.chars().count();
            match placement.orientation {
                Orientation::Horizontal => {
                    assert!(placement.col + len <= 10);
                    assert!(placement.row < 10);
                }
                Orientation::Vertical => {
                    assert!(placement.row + len <= 10);
                    assert!(placement.col < 10);
                }
            }
        }
    }

    #[test]
    fn test_words_never_overlap() {
        let list = words(&["PARE", "CEDA", "GIRO", "CURVA"]);
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = generate(&list, 8, &mut rng).unwrap();

        let mut seen = std::collections::HashSet::new();
        for placement in &puzzle.placements {
            for index in placement.cell_indices(puzzle.grid.size()) {
                assert!(seen.insert(index), "cell {index} used by two words");
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let list = words(&["PARE", "CEDA", "GIRO"]);
        let a = generate(&list, 9, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate(&list, 9, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
    }

    #[test]
    fn test_word_longer_than_grid_fails_fast() {
        let list = words(&["PREFERENCIAL"]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&list, 5, &mut rng).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_full_span_word_is_placeable() {
        // word length == grid size: the only legal start is 0
        let list = words(&["CAT"]);
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = generate(&list, 3, &mut rng).unwrap();
        let placement = &puzzle.placements[0];
        match placement.orientation {
            Orientation::Horizontal => assert_eq!(placement.col, 0),
            Orientation::Vertical => assert_eq!(placement.row, 0),
        }
    }

    #[test]
    fn test_crowded_grid_surfaces_unplaceable() {
        // Three full-span words fill a 3x3 grid; the fourth has nowhere
        // to go because cells never merge.
        let list = words(&["AAA", "BBB", "CCC", "DDD"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&list, 3, &mut rng).unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&[], 5, &mut rng).unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
