//! The in-progress drag selection and its two-state gesture machine.
//!
//! A selection is an ordered list of distinct flat cell indices. It is born
//! with a single cell on gesture-start, only ever grows while the drag is
//! live (revisited cells are ignored, not an error), and is consumed or
//! discarded when the gesture ends.

use serde::Serialize;

/// Ordered sequence of distinct grid cell indices covered by one drag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Start a new selection over a single cell.
    #[must_use]
    pub fn start(index: usize) -> Self {
        Self {
            indices: vec![index],
        }
    }

    /// Append a cell to the selection. Duplicate indices are ignored so a
    /// drag that wanders back over its own path does not grow the selection.
    pub fn extend(&mut self, index: usize) {
        if !self.indices.contains(&index) {
            self.indices.push(index);
        }
    }

    /// The selected cell indices, in drag order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Discard the selection contents.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

/// Whether a drag gesture is currently in flight.
///
/// Idle → Dragging on gesture-start; Dragging → Idle on gesture-end or
/// gesture-abort. Moves received while Idle are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_grows_in_order() {
        let mut selection = Selection::start(5);
        selection.extend(6);
        selection.extend(7);
        assert_eq!(selection.indices(), &[5, 6, 7]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut selection = Selection::start(3);
        selection.extend(4);
        selection.extend(3);
        selection.extend(4);
        assert_eq!(selection.indices(), &[3, 4]);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = Selection::start(0);
        selection.extend(1);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection, Selection::default());
    }
}
