use crate::{Error, Result};

/// Settings for generating and scoring a game. See [`GameConfig::default`] for the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// The grid size a new game starts with, before any expansion.
    pub initial_size: usize,

    /// How many failed random placements in a row are allowed before the grid grows.
    pub retry_budget: usize,

    /// The grid never grows past this size. Words that still don't fit are reported as unplaceable.
    pub max_size: usize,

    /// Points awarded for each word found.
    pub points_per_word: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_size: 10,
            retry_budget: 50,
            max_size: 64,
            points_per_word: 10,
        }
    }
}

impl GameConfig {
    /// Sets the starting grid size.
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Sets how many consecutive failures trigger an expansion.
    pub fn with_retry_budget(mut self, budget: usize) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Sets the largest size the grid may grow to.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the score for each word found.
    pub fn with_points_per_word(mut self, points: u32) -> Self {
        self.points_per_word = points;
        self
    }

    /// Checks that the sizes make sense together.
    pub fn validate(&self) -> Result<()> {
        if self.initial_size == 0 || self.max_size < self.initial_size {
            return Err(Error::InvalidSize {
                size: self.initial_size,
                max_size: self.max_size,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.initial_size, 10);
        assert_eq!(config.retry_budget, 50);
        assert_eq!(config.points_per_word, 10);
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = GameConfig::default().with_initial_size(0);

        assert!(matches!(config.validate(), Err(Error::InvalidSize { size: 0, .. })));
    }

    #[test]
    fn max_below_initial_is_rejected() {
        let config = GameConfig::default().with_initial_size(12).with_max_size(8);

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSize {
                size: 12,
                max_size: 8
            })
        ));
    }
}
