//! The square letter grid and its row-major index mapping.
//!
//! Cells are addressed two ways: by `(row, col)` pair during generation, and
//! by flat index (`index = row * size + col`) during selection handling,
//! since drag gestures arrive as cell indices. Both views address the same
//! flat `Vec<char>` storage.

use crate::letters::EMPTY_MARKER;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An N×N grid of single characters.
///
/// Mutable only while the generator is placing and filling; everything
/// downstream (validator, session accessors, rendering output) reads it
/// through `&Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    /// Row-major flat storage: cell `(r, c)` lives at `r * size + c`.
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid with every cell set to the empty sentinel.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY_MARKER; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat row-major index of `(row, col)`.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Inverse of [`Grid::index_of`]: `(index / size, index % size)`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Letter at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds. The generator only produces
    /// in-bounds positions, so out-of-bounds access here is a programming
    /// error, not bad user input.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(row < self.size && col < self.size, "cell ({row},{col}) out of bounds for size {}", self.size);
        self.cells[row * self.size + col]
    }

    /// Letter at a flat cell index, or `None` if the index is out of range.
    ///
    /// Selections come from the input collaborator, so unlike [`Grid::get`]
    /// this is total over arbitrary indices.
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        let i = self.index_of(row, col);
        self.cells[i] = letter;
    }

    pub(crate) fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == EMPTY_MARKER
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_is_all_sentinel() {
        let grid = Grid::empty(4);
        assert_eq!(grid.cells().count(), 16);
        assert!(grid.cells().all(|c| c == EMPTY_MARKER));
    }

    #[test]
    fn test_index_mapping_roundtrip() {
        let grid = Grid::empty(15);
        for row in 0..15 {
            for col in 0..15 {
                let index = grid.index_of(row, col);
                assert_eq!(grid.position_of(index), (row, col));
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty(3);
        grid.set(1, 2, 'Q');
        assert_eq!(grid.get(1, 2), 'Q');
        assert_eq!(grid.letter_at(5), Some('Q'));
        assert!(!grid.is_open(1, 2));
        assert!(grid.is_open(0, 0));
    }

    #[test]
    fn test_letter_at_out_of_range() {
        let grid = Grid::empty(3);
        assert_eq!(grid.letter_at(9), None);
    }

    #[test]
    fn test_display_one_line_per_row() {
        let grid = Grid::empty(3);
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert_eq!(rendered.lines().next(), Some("_ _ _"));
    }
}
