use thiserror::Error;

/// An error that happened while setting up or playing a word hunt.
#[derive(Error, Debug)]
pub enum Error {
    /// The grid size is zero, or the maximum size is smaller than the initial size.
    #[error("invalid grid size {size} (maximum is {max_size})")]
    InvalidSize {
        /// The requested initial size.
        size: usize,
        /// The configured size cap.
        max_size: usize,
    },

    /// A word was empty after trimming.
    #[error("words must not be empty")]
    EmptyWord,

    /// A word contained something other than the letters A to Z.
    #[error("{0:?} is not a valid word, only the letters A-Z are allowed")]
    InvalidWord(String),

    /// The generator gave up on a word without being able to place it.
    #[error("cannot place {word:?} in a grid of at most {max_size}x{max_size}")]
    WordUnplaceable {
        /// The word that could not be placed.
        word: String,
        /// The largest grid the generator was allowed to grow to.
        max_size: usize,
    },

    /// A selected coordinate is outside the grid.
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Row of the rejected cell.
        row: usize,
        /// Column of the rejected cell.
        col: usize,
        /// Current grid size.
        size: usize,
    },

    /// Reading player input or writing to the terminal failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results carrying this crate's [Error].
pub type Result<T> = std::result::Result<T, Error>;
