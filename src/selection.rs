//! Tracking which cells the player has picked.

use crate::grid::Grid;

/// What a click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The cell was appended to the selection.
    Added,

    /// The cell was already selected and has been removed.
    Removed,

    /// The cell was not next to the last selected cell, so the selection was cleared.
    Reset,
}

/// The cells a player has picked so far, in the order they were picked.
///
/// Each new cell has to touch the previous one (including diagonally).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<(usize, usize)>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected cells, oldest first.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, col)` is part of the selection.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Handles a click on `(row, col)`.
    pub fn click(&mut self, row: usize, col: usize) -> SelectionChange {
        if let Some(pos) = self.cells.iter().position(|&cell| cell == (row, col)) {
            self.cells.remove(pos);
            return SelectionChange::Removed;
        }

        match self.cells.last() {
            Some(&last) if !adjacent(last, (row, col)) => {
                self.clear();
                SelectionChange::Reset
            }
            _ => {
                self.cells.push((row, col));
                SelectionChange::Added
            }
        }
    }

    /// Drops every selected cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The letters under the selection, in selection order.
    pub fn word(&self, grid: &Grid) -> String {
        self.cells
            .iter()
            .filter_map(|&(row, col)| grid.get(row, col))
            .collect()
    }
}

/// Chebyshev distance of exactly one.
fn adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_cells_are_appended() {
        let mut selection = Selection::new();

        assert_eq!(selection.click(1, 1), SelectionChange::Added);
        assert_eq!(selection.click(2, 2), SelectionChange::Added);
        assert_eq!(selection.click(2, 3), SelectionChange::Added);
        assert_eq!(selection.cells(), &[(1, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn non_adjacent_click_resets() {
        let mut selection = Selection::new();
        selection.click(0, 0);
        selection.click(0, 1);

        assert_eq!(selection.click(3, 3), SelectionChange::Reset);
        assert!(selection.is_empty());
    }

    #[test]
    fn clicking_a_selected_cell_removes_it() {
        let mut selection = Selection::new();
        selection.click(0, 0);
        selection.click(0, 1);

        assert_eq!(selection.click(0, 0), SelectionChange::Removed);
        assert_eq!(selection.cells(), &[(0, 1)]);
    }

    #[test]
    fn word_reads_in_selection_order() {
        let grid = Grid::from_rows(&["CAT", "OXX", "WXX"]).unwrap();
        let mut selection = Selection::new();
        selection.click(2, 0);
        selection.click(1, 0);
        selection.click(0, 0);

        assert_eq!(selection.word(&grid), "WOC");
    }
}
