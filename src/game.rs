//! A single play session: the generated grid, the words left to find, and the score.

use std::{collections::HashSet, fmt::Display};

use log::info;
use rand::Rng;

use crate::{
    generator::GridGenerator,
    grid::{Grid, Placement},
    selection::{Selection, SelectionChange},
    Error, GameConfig, Result,
};

/// The result of checking the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The selection spelled a remaining word.
    WordFound {
        /// The word that was found.
        word: String,
        /// Points added to the score.
        points: u32,
    },

    /// The selection spelled the last remaining word.
    GameWon {
        /// The word that was found.
        word: String,
        /// The final score.
        score: u32,
    },

    /// The selection didn't match any remaining word.
    NoMatch(String),
}

/// A word hunt in progress.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    placements: Vec<Placement>,
    original_words: Vec<String>,
    remaining_words: Vec<String>,
    found_cells: HashSet<(usize, usize)>,
    selection: Selection,
    score: u32,
}

impl Game {
    /// Generates a new game from `words`, which should already be normalized
    /// (see [`normalize_words`](crate::words::normalize_words)).
    pub fn new(words: Vec<String>, config: GameConfig) -> Result<Self> {
        Self::with_rng(words, config, &mut rand::thread_rng())
    }

    /// Generates a new game, drawing every random choice from `rng`.
    pub fn with_rng<R: Rng>(words: Vec<String>, config: GameConfig, rng: &mut R) -> Result<Self> {
        let (grid, placements) = build_grid(&words, &config, rng)?;

        info!(
            "new game: {} words in a {1}x{1} grid",
            words.len(),
            grid.size()
        );

        Ok(Self::from_parts(grid, placements, words, config))
    }

    /// Starts a game on a grid that has already been filled in.
    ///
    /// The words are not checked against the grid.
    pub fn from_grid(grid: Grid, words: Vec<String>, config: GameConfig) -> Self {
        Self::from_parts(grid, Vec::new(), words, config)
    }

    fn from_parts(
        grid: Grid,
        placements: Vec<Placement>,
        words: Vec<String>,
        config: GameConfig,
    ) -> Self {
        Self {
            config,
            grid,
            placements,
            original_words: words.clone(),
            remaining_words: words,
            found_cells: HashSet::new(),
            selection: Selection::new(),
            score: 0,
        }
    }

    /// Throws away the current game and generates a fresh one from `words`,
    /// starting again from the configured initial size.
    pub fn restart<R: Rng>(&mut self, words: Vec<String>, rng: &mut R) -> Result<()> {
        *self = Self::with_rng(words, self.config, rng)?;
        Ok(())
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current grid size, including any growth during generation.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Where each word was placed. Empty for games built with [`Game::from_grid`].
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The full word list the game started with.
    pub fn original_words(&self) -> &[String] {
        &self.original_words
    }

    /// The words not yet found.
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining_words
    }

    /// The current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The in-progress selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether `(row, col)` is part of a word the player has found.
    pub fn is_found(&self, row: usize, col: usize) -> bool {
        self.found_cells.contains(&(row, col))
    }

    /// Whether every word has been found.
    pub fn is_won(&self) -> bool {
        self.remaining_words.is_empty()
    }

    /// Forwards a click on `(row, col)` to the selection.
    pub fn click(&mut self, row: usize, col: usize) -> Result<SelectionChange> {
        if !self.grid.contains(row, col) {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.grid.size(),
            });
        }

        Ok(self.selection.click(row, col))
    }

    /// Checks the selection against the remaining words, then clears it.
    pub fn check_selection(&mut self) -> CheckOutcome {
        let attempt = self.selection.word(&self.grid);

        let outcome = match self.remaining_words.iter().position(|word| *word == attempt) {
            Some(index) => {
                let word = self.remaining_words.remove(index);
                let points = self.config.points_per_word;
                self.score += points;
                self.found_cells.extend(self.selection.cells().iter().copied());
                info!("found {word}, score is now {}", self.score);

                if self.remaining_words.is_empty() {
                    info!("all words found");
                    CheckOutcome::GameWon {
                        word,
                        score: self.score,
                    }
                } else {
                    CheckOutcome::WordFound { word, points }
                }
            }
            None => {
                info!("{attempt:?} is not a remaining word");
                CheckOutcome::NoMatch(attempt)
            }
        };

        self.selection.clear();
        outcome
    }
}

fn build_grid<R: Rng>(
    words: &[String],
    config: &GameConfig,
    rng: &mut R,
) -> Result<(Grid, Vec<Placement>)> {
    let mut generator = GridGenerator::with_rng(config, rng)?;
    generator.generate(words)?;
    generator.fill_blanks();

    let placements = generator.placements().to_vec();
    Ok((generator.into_grid(), placements))
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut clues = self.remaining_words.iter();

        for row in self.grid.rows() {
            for ch in row {
                write!(f, "{} ", ch)?;
            }

            match clues.next() {
                Some(word) => writeln!(f, "| {}", word)?,
                None => writeln!(f, "|")?,
            }
        }

        for word in clues {
            writeln!(f, "{:width$}| {}", "", word, width = self.grid.size() * 2)?;
        }

        write!(f, "Score: {}", self.score)
    }
}
