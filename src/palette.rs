//! Cyclic display-color palette for found words.
//!
//! The Nth distinct matched word (counting from zero) gets
//! `colors[n % colors.len()]`, so a round with more words than colors wraps
//! around and reuses colors from the start.

use crate::errors::PuzzleError;

/// Default highlight colors, one per found word, recycled in order.
pub const DEFAULT_COLORS: [&str; 12] = [
    "#FF9AA2", "#FFB7B2", "#FFDAC1", "#E2F0CB", "#B5EAD7", "#C7CEEA",
    "#9DD6FF", "#FFE400", "#FFD700", "#019548", "#039fdd", "#87CEFA",
];

/// A finite, ordered list of display colors assigned cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from an ordered color list.
    ///
    /// # Errors
    /// Returns [`PuzzleError::EmptyPalette`] if `colors` is empty, since the
    /// cyclic index would be undefined.
    pub fn new(colors: Vec<String>) -> Result<Self, PuzzleError> {
        if colors.is_empty() {
            return Err(PuzzleError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of colors before the cycle repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // `new` rejects empty color lists
        false
    }

    /// Color for the match with `found_count` words already found before it.
    ///
    /// The first match passes 0 and gets the first color; once `found_count`
    /// reaches the palette length the assignment wraps via modulo.
    #[must_use]
    pub fn color_for(&self, found_count: usize) -> &str {
        &self.colors[found_count % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(ToString::to_string).collect(),
        }
    }
}
