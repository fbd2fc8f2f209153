#![warn(missing_docs)]

//! # Word hunt
//!
//! A word search game. Words are hidden in a square grid of letters, horizontally or vertically,
//! and the player finds them by selecting runs of touching cells.
//!
//! The grid is built by [`GridGenerator`], which tries random positions for each word and grows
//! the grid whenever it runs out of room. [`Game`] wraps a generated grid with the selection,
//! scoring, and win tracking a front end needs.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_hunt::{Game, GameConfig};
//!
//! let words = word_hunt::words::normalize_words(["cat", "dog"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let game = Game::with_rng(words, GameConfig::default(), &mut rng).unwrap();
//!
//! assert_eq!(game.remaining_words().len(), 2);
//! assert_eq!(game.grid().blank_count(), 0);
//! ```

mod config;
mod error;
pub mod game;
pub mod generator;
pub mod grid;
pub mod log;
pub mod selection;
pub mod words;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{CheckOutcome, Game};
pub use generator::GridGenerator;
pub use grid::{Grid, Orientation, Placement, BLANK};
pub use selection::{Selection, SelectionChange};
