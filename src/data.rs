//! Random input arrays for the visualizer.

use rand::Rng;

use crate::error::ConfigError;

/// Configuration for input generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataConfig {
    /// Number of bars
    pub length: usize,
    /// Smallest value, inclusive
    pub min: u32,
    /// Largest value, exclusive
    pub max: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            length: 16,
            min: 1,
            max: 10,
        }
    }
}

/// Draw `config.length` values uniformly from `[min, max)`.
pub fn random_data<R: Rng + ?Sized>(rng: &mut R, config: &DataConfig) -> Result<Vec<u32>, ConfigError> {
    if config.min >= config.max {
        return Err(ConfigError::EmptyRange {
            min: config.min,
            max: config.max,
        });
    }

    Ok((0..config.length)
        .map(|_| rng.gen_range(config.min..config.max))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let data = random_data(&mut rng, &DataConfig::default()).unwrap();
        assert_eq!(data.len(), 16);
        assert!(data.iter().all(|&v| (1..10).contains(&v)));
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let config = DataConfig { length: 32, ..DataConfig::default() };
        let a = random_data(&mut ChaCha8Rng::seed_from_u64(99), &config).unwrap();
        let b = random_data(&mut ChaCha8Rng::seed_from_u64(99), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_range() {
        let config = DataConfig { length: 4, min: 5, max: 5 };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            random_data(&mut rng, &config),
            Err(ConfigError::EmptyRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn zero_length_is_empty() {
        let config = DataConfig { length: 0, ..DataConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(random_data(&mut rng, &config), Ok(Vec::new()));
    }
}
