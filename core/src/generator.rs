use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board shape configuration: square side length and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self { size, mines };
        config.validate()?;
        Ok(config)
    }

    /// Fail-fast check of the construction preconditions: a positive side
    /// length and `mines < size * size`. A full board could never be won
    /// and mine placement would never terminate.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: 9, mines: 10 }
    }
}

pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Array2<bool>;
}

/// Uniform placement without replacement: draw random positions and retry
/// on duplicates until the requested number of distinct mines is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomGenerator {
    seed: u64,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomGenerator {
    fn generate(self, config: &GameConfig) -> Array2<bool> {
        use rand::prelude::*;

        let size = config.size;
        let mut mines: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));
        let mut placed: CellCount = 0;

        // terminates because the config guarantees mines < total cells
        let mut rng = SmallRng::seed_from_u64(self.seed);
        while placed < config.mines {
            let coords: Coord2 = (rng.gen_range(0..size), rng.gen_range(0..size));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                continue;
            }
            *cell = true;
            placed += 1;
        }

        // double check mine count
        let count = mines.iter().filter(|&&mine| mine).count();
        if count != usize::from(config.mines) {
            log::warn!(
                "Generated mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_mine_counts_that_fill_the_board() {
        assert_eq!(GameConfig::new(3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 10), Err(GameError::TooManyMines));
        assert!(GameConfig::new(3, 8).is_ok());
    }

    #[test]
    fn default_config_is_nine_by_nine_with_ten_mines() {
        let config = GameConfig::default();
        assert_eq!(config.size, 9);
        assert_eq!(config.mines, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn generator_places_exactly_the_requested_mines() {
        let config = GameConfig::new(9, 10).unwrap();
        for seed in 0..20 {
            let mines = RandomGenerator::new(seed).generate(&config);
            assert_eq!(mines.iter().filter(|&&mine| mine).count(), 10);
        }
    }

    #[test]
    fn generator_is_deterministic_for_a_seed() {
        let config = GameConfig::new(9, 10).unwrap();
        let first = RandomGenerator::new(42).generate(&config);
        let second = RandomGenerator::new(42).generate(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_mines_is_a_valid_configuration() {
        let config = GameConfig::new(5, 0).unwrap();
        let mines = RandomGenerator::new(1).generate(&config);
        assert!(mines.iter().all(|&mine| !mine));
    }

    #[test]
    fn near_full_board_still_terminates() {
        let config = GameConfig::new(4, 15).unwrap();
        let mines = RandomGenerator::new(7).generate(&config);
        assert_eq!(mines.iter().filter(|&&mine| mine).count(), 15);
    }
}
