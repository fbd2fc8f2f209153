//! Random placement of words into a [Grid], growing the grid when it runs out of room.

use log::{debug, trace};
use rand::{rngs::ThreadRng, Rng};

use crate::{
    grid::{Grid, Orientation, Placement, BLANK},
    Error, GameConfig, Result,
};

/// Packs words into a square grid.
///
/// Each word is tried at random starting cells and orientations. Once
/// [`GameConfig::retry_budget`] attempts in a row have failed, the grid grows by one row and one
/// column and sampling starts over. The grid never grows past [`GameConfig::max_size`]; at that
/// size a final exhaustive scan is made before the word is reported as unplaceable.
#[derive(Debug)]
pub struct GridGenerator<R = ThreadRng> {
    grid: Grid,
    rng: R,
    retry_budget: usize,
    max_size: usize,
    placements: Vec<Placement>,
    expansions: usize,
}

impl GridGenerator<ThreadRng> {
    /// Creates a generator with a blank grid of `config.initial_size`, using the thread-local RNG.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GridGenerator<R> {
    /// Creates a generator that draws from `rng`. A seeded RNG gives reproducible grids.
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            grid: Grid::new(config.initial_size),
            rng,
            retry_budget: config.retry_budget,
            max_size: config.max_size,
            placements: Vec::new(),
            expansions: 0,
        })
    }

    /// The grid as generated so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every placement committed so far, in order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// How many times the grid has grown.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether `word` can be written at `(row, col)` in the given orientation.
    ///
    /// Every covered cell must be inside the grid and either blank or already hold the matching
    /// letter.
    pub fn can_place(&self, word: &str, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.grid.fits(word.chars().count(), row, col, orientation) {
            return false;
        }

        word.chars().enumerate().all(|(i, ch)| {
            let cell = self.grid[orientation.step((row, col), i)];
            cell == BLANK || cell == ch
        })
    }

    /// Writes `word` into the grid. Only call this right after [`can_place`](Self::can_place)
    /// returned true for the same arguments.
    pub fn place(&mut self, word: &str, row: usize, col: usize, orientation: Orientation) {
        debug_assert!(self.can_place(word, row, col, orientation));

        for (i, ch) in word.chars().enumerate() {
            let (r, c) = orientation.step((row, col), i);
            self.grid.set(r, c, ch);
        }

        self.placements
            .push(Placement::new(word, row, col, orientation));
    }

    /// Grows the grid by one in both directions.
    pub fn expand(&mut self) {
        self.grid.expand();
        self.expansions += 1;
        debug!("expanded grid to {0}x{0}", self.grid.size());
    }

    /// Places `word` at a random valid position, growing the grid as needed.
    pub fn place_with_retry(&mut self, word: &str) -> Result<Placement> {
        if word.chars().count() > self.max_size {
            return Err(self.unplaceable(word));
        }

        let mut failures = 0;

        loop {
            let size = self.grid.size();
            let orientation = Orientation::random(&mut self.rng);
            let row = self.rng.gen_range(0..size);
            let col = self.rng.gen_range(0..size);

            if self.can_place(word, row, col, orientation) {
                self.place(word, row, col, orientation);
                trace!("placed {word} at ({row}, {col}) {orientation:?}");
                return Ok(Placement::new(word, row, col, orientation));
            }

            failures += 1;

            if failures >= self.retry_budget {
                if size < self.max_size {
                    self.expand();
                    failures = 0;
                } else {
                    return self.place_by_scan(word);
                }
            }
        }
    }

    // Last resort at the size cap: try every start cell before giving up.
    fn place_by_scan(&mut self, word: &str) -> Result<Placement> {
        let size = self.grid.size();

        for row in 0..size {
            for col in 0..size {
                for orientation in Orientation::ALL {
                    if self.can_place(word, row, col, orientation) {
                        self.place(word, row, col, orientation);
                        debug!("placed {word} by scan at ({row}, {col}) {orientation:?}");
                        return Ok(Placement::new(word, row, col, orientation));
                    }
                }
            }
        }

        Err(self.unplaceable(word))
    }

    fn unplaceable(&self, word: &str) -> Error {
        Error::WordUnplaceable {
            word: word.to_string(),
            max_size: self.max_size,
        }
    }

    /// Places every word, in order. Earlier words constrain later ones.
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
        for word in words {
            self.place_with_retry(word.as_ref())?;
        }

        debug!(
            "placed {} words in a {1}x{1} grid after {2} expansions",
            words.len(),
            self.grid.size(),
            self.expansions
        );

        Ok(())
    }

    /// Fills every remaining blank cell with a random letter. Run this after [`generate`](Self::generate).
    pub fn fill_blanks(&mut self) {
        self.grid.fill_blanks(&mut self.rng);
    }

    /// Consumes the generator, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
