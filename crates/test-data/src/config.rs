//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Inclusive range of a generated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns a random value within the range, or `min` when the range is empty.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }
}

/// Configuration for package generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Random seed; the same seed always yields the same packages.
    pub seed: u64,

    /// Workout duration in hours.
    pub duration_hours: ValueRange,

    /// Athlete weight in kilograms.
    pub weight_kg: ValueRange,

    /// Athlete height in centimeters (walking only).
    pub height_cm: ValueRange,

    /// Fraction of packages carrying an unknown activity code, for error-path testing.
    pub invalid_fraction: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            package_count: 30,
            seed: 12345,
            duration_hours: ValueRange::new(0.25, 2.0),
            weight_kg: ValueRange::new(50.0, 100.0),
            height_cm: ValueRange::new(150.0, 200.0),
            invalid_fraction: 0.0,
        }
    }
}

impl SeedConfig {
    /// Reads overrides from the environment, keeping defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(count) = get("SEED_PACKAGE_COUNT") {
            config.package_count = count.trim().parse()?;
        }
        if let Some(seed) = get("SEED_RANDOM_SEED") {
            config.seed = seed.trim().parse()?;
        }
        if let Some(fraction) = get("SEED_INVALID_FRACTION") {
            let fraction: f64 = fraction.trim().parse()?;
            anyhow::ensure!(
                (0.0..=1.0).contains(&fraction),
                "SEED_INVALID_FRACTION must be between 0 and 1, got {fraction}"
            );
            config.invalid_fraction = fraction;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_empty_range_returns_min() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert_eq!(ValueRange::new(3.0, 3.0).sample(&mut rng), 3.0);
        assert_eq!(ValueRange::new(5.0, 1.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn test_from_env_overrides() {
        let get = |k: &str| match k {
            "SEED_PACKAGE_COUNT" => Some("7".into()),
            "SEED_RANDOM_SEED" => Some("99".into()),
            _ => None,
        };
        let config = SeedConfig::from_env_with(get).unwrap();
        assert_eq!(config.package_count, 7);
        assert_eq!(config.seed, 99);
        assert_eq!(config.invalid_fraction, 0.0);
    }

    #[test]
    fn test_from_env_rejects_bad_fraction() {
        let get = |k: &str| match k {
            "SEED_INVALID_FRACTION" => Some("1.5".into()),
            _ => None,
        };
        assert!(SeedConfig::from_env_with(get).is_err());
    }
}
