//! The square letter grid that words are hidden in.

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::Rng;

/// Marks a cell that no word or filler letter has been written to yet.
pub const BLANK: char = ' ';

/// Letters used to fill cells that are not covered by any word.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The direction a word is read in. Words are never placed backwards or diagonally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,

    /// Top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Both orientations, in a fixed order.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Returns a random orientation drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Offsets a start coordinate by `i` cells in this direction.
    pub fn step(self, (row, col): (usize, usize), i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// Where a word was written into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The word that was placed.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// The direction the word runs in.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement record.
    pub fn new(word: impl Into<String>, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            word: word.into(),
            row,
            col,
            orientation,
        }
    }

    /// Every cell the word covers, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.word.chars().count())
            .map(|i| self.orientation.step((self.row, self.col), i))
            .collect()
    }
}

/// A square grid of characters. Cells hold either [BLANK] or one uppercase letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<char>,
}

impl Grid {
    /// Creates a `size` x `size` grid with every cell blank.
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2D::filled_with(BLANK, size, size),
        }
    }

    /// Builds a grid from rows of text. Used to set up fixed layouts.
    ///
    /// Returns `None` if the rows don't form a square.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let rows: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();

        if rows.iter().any(|row| row.len() != size) {
            return None;
        }

        Array2D::from_rows(&rows).ok().map(|cells| Self { cells })
    }

    /// The number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// Gets the character at the given coordinate, or `None` if it is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row, col).copied()
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[(row, col)] = ch;
    }

    /// Whether a word of `len` letters starting at `(row, col)` stays inside the grid.
    pub fn fits(&self, len: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.contains(row, col) {
            return false;
        }

        match orientation {
            Orientation::Horizontal => col + len <= self.size(),
            Orientation::Vertical => row + len <= self.size(),
        }
    }

    /// Reads `len` letters starting at `(row, col)`, or `None` if that runs off the grid.
    pub fn read(&self, row: usize, col: usize, len: usize, orientation: Orientation) -> Option<String> {
        if !self.fits(len, row, col, orientation) {
            return None;
        }

        (0..len)
            .map(|i| {
                let (r, c) = orientation.step((row, col), i);
                self.get(r, c)
            })
            .collect()
    }

    /// Reads the letters along a placement's path.
    pub fn read_placement(&self, placement: &Placement) -> Option<String> {
        self.read(
            placement.row,
            placement.col,
            placement.word.chars().count(),
            placement.orientation,
        )
    }

    /// Grows the grid by one row at the bottom and one column at the right.
    ///
    /// New cells are blank and every existing cell keeps its coordinate.
    pub fn expand(&mut self) {
        let old = self.size();
        let mut cells = Array2D::filled_with(BLANK, old + 1, old + 1);

        for row in 0..old {
            for col in 0..old {
                cells[(row, col)] = self.cells[(row, col)];
            }
        }

        self.cells = cells;
    }

    /// Replaces every blank cell with a letter drawn uniformly from [ALPHABET].
    pub fn fill_blanks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let letters: Vec<char> = ALPHABET.chars().collect();

        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.cells[(row, col)] == BLANK {
                    self.cells[(row, col)] = letters[rng.gen_range(0..letters.len())];
                }
            }
        }
    }

    /// The number of cells still holding [BLANK].
    pub fn blank_count(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|&&ch| ch == BLANK)
            .count()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<char>> + '_ {
        self.cells.rows_iter().map(|row| row.copied().collect())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            for &ch in row {
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.blank_count(), 16);
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn expand_keeps_existing_cells() {
        let mut grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        grid.expand();

        assert_eq!(grid.size(), 3);
        assert_eq!(grid[(0, 0)], 'A');
        assert_eq!(grid[(0, 1)], 'B');
        assert_eq!(grid[(1, 0)], 'C');
        assert_eq!(grid[(1, 1)], 'D');

        for i in 0..3 {
            assert_eq!(grid[(2, i)], BLANK);
            assert_eq!(grid[(i, 2)], BLANK);
        }
    }

    #[test]
    fn fill_blanks_leaves_letters_alone() {
        let mut grid = Grid::from_rows(&["Q  ", "   ", "  Z"]).unwrap();
        grid.fill_blanks(&mut StdRng::seed_from_u64(7));

        assert_eq!(grid.blank_count(), 0);
        assert_eq!(grid[(0, 0)], 'Q');
        assert_eq!(grid[(2, 2)], 'Z');
        assert!(grid.rows().flatten().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn read_respects_bounds() {
        let grid = Grid::from_rows(&["CAT", "XXX", "YYY"]).unwrap();

        assert_eq!(grid.read(0, 0, 3, Orientation::Horizontal).as_deref(), Some("CAT"));
        assert_eq!(grid.read(0, 1, 3, Orientation::Vertical).as_deref(), Some("AXY"));
        assert_eq!(grid.read(0, 1, 3, Orientation::Horizontal), None);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(&["AB", "C"]).is_none());
        assert!(Grid::from_rows(&["AB", "CD", "EF"]).is_none());
    }

    #[test]
    fn placement_cells_follow_orientation() {
        let across = Placement::new("DOG", 1, 0, Orientation::Horizontal);
        let down = Placement::new("DOG", 0, 2, Orientation::Vertical);

        assert_eq!(across.cells(), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(down.cells(), vec![(0, 2), (1, 2), (2, 2)]);
    }
}
