//! Sensor package generation.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use workouts::models::{ActivityKind, SensorPackage};

use crate::{
    config::SeedConfig,
    profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, actions_for_duration,
        sample_variance,
    },
};

/// Codes no dispatcher accepts.
const INVALID_CODES: [&str; 3] = ["XYZ", "BIK", "run"];

/// Generates sensor packages from athlete profiles.
pub struct PackageGenerator {
    config: SeedConfig,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl PackageGenerator {
    /// Creates a generator with default profiles.
    pub fn new(config: SeedConfig) -> Self {
        Self {
            config,
            runner: RunnerProfile::default(),
            walker: WalkerProfile::default(),
            swimmer: SwimmerProfile::default(),
        }
    }

    /// Replaces the runner profile.
    pub fn with_runner(mut self, runner: RunnerProfile) -> Self {
        self.runner = runner;
        self
    }

    /// Generates `package_count` packages, cycling through the activity kinds.
    ///
    /// Output depends only on the configured seed.
    pub fn generate_all(&self) -> Vec<SensorPackage> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let packages: Vec<SensorPackage> = ActivityKind::ALL
            .into_iter()
            .cycle()
            .take(self.config.package_count)
            .map(|kind| {
                if rng.gen_bool(self.config.invalid_fraction) {
                    self.generate_invalid(&mut rng)
                } else {
                    self.generate(kind, &mut rng)
                }
            })
            .collect();

        debug!(count = packages.len(), seed = self.config.seed, "Generated packages");
        packages
    }

    /// Generates one valid package of the given kind.
    pub fn generate(&self, kind: ActivityKind, rng: &mut impl Rng) -> SensorPackage {
        let duration = round2(self.config.duration_hours.sample(rng));
        let weight = self.config.weight_kg.sample(rng).round();

        let data = match kind {
            ActivityKind::Running => {
                let action = self.actions(&self.runner, duration, rng);
                vec![action, duration, weight]
            }
            ActivityKind::Walking => {
                let action = self.actions(&self.walker, duration, rng);
                let height = self.config.height_cm.sample(rng).round();
                vec![action, duration, weight, height]
            }
            ActivityKind::Swimming => {
                let action = self.actions(&self.swimmer, duration, rng);
                let length_pool = if rng.gen_bool(0.7) { 25.0 } else { 50.0 };
                let factor = sample_variance(&self.swimmer, rng);
                let count_pool = self.swimmer.laps_for(duration, length_pool, factor);
                vec![action, duration, weight, length_pool, count_pool]
            }
        };

        SensorPackage::new(kind.code(), data)
    }

    fn generate_invalid(&self, rng: &mut impl Rng) -> SensorPackage {
        let code = INVALID_CODES[rng.gen_range(0..INVALID_CODES.len())];
        let duration = round2(self.config.duration_hours.sample(rng));
        let weight = self.config.weight_kg.sample(rng).round();
        SensorPackage::new(code, vec![1000.0, duration, weight])
    }

    fn actions(&self, profile: &dyn AthleteProfile, duration: f64, rng: &mut impl Rng) -> f64 {
        let factor = sample_variance(profile, rng);
        f64::from(actions_for_duration(profile, duration, factor))
    }
}

/// Rounds to hundredths, keeping durations readable in the JSON output.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use workouts::{packages::read_package, training::Training};

    #[test]
    fn test_generated_packages_are_readable() {
        let config = SeedConfig {
            package_count: 60,
            ..Default::default()
        };
        let packages = PackageGenerator::new(config).generate_all();
        assert_eq!(packages.len(), 60);

        for package in &packages {
            let workout = read_package(&package.workout_type, &package.data)
                .unwrap_or_else(|e| panic!("package {package:?} rejected: {e}"));
            assert!(workout.distance() >= 0.0);
            assert!(workout.mean_speed() >= 0.0);
            assert!(workout.spent_calories().is_finite());
        }
    }

    #[test]
    fn test_kinds_cycle_in_order() {
        let config = SeedConfig {
            package_count: 4,
            ..Default::default()
        };
        let codes: Vec<String> = PackageGenerator::new(config)
            .generate_all()
            .into_iter()
            .map(|p| p.workout_type)
            .collect();
        assert_eq!(codes, vec!["RUN", "WLK", "SWM", "RUN"]);
    }

    #[test]
    fn test_same_seed_same_packages() {
        let first = PackageGenerator::new(SeedConfig::default()).generate_all();
        let second = PackageGenerator::new(SeedConfig::default()).generate_all();
        assert_eq!(first, second);

        let other = PackageGenerator::new(SeedConfig {
            seed: 1,
            ..Default::default()
        })
        .generate_all();
        assert_ne!(first, other);
    }

    #[test]
    fn test_invalid_fraction_produces_unknown_codes() {
        let config = SeedConfig {
            package_count: 10,
            invalid_fraction: 1.0,
            ..Default::default()
        };
        for package in PackageGenerator::new(config).generate_all() {
            assert!(INVALID_CODES.contains(&package.workout_type.as_str()));
            assert!(read_package(&package.workout_type, &package.data).is_err());
        }
    }

    #[test]
    fn test_custom_runner_profile() {
        let generator = PackageGenerator::new(SeedConfig {
            duration_hours: crate::config::ValueRange::new(1.0, 1.0),
            ..Default::default()
        })
        .with_runner(RunnerProfile::with_cadence(180.0));
        let mut rng = StdRng::seed_from_u64(3);
        let package = generator.generate(ActivityKind::Running, &mut rng);
        // 10,800 steps an hour, clamped variance of 0.7..=1.4
        assert!(package.data[0] >= 7_560.0 && package.data[0] <= 15_120.0);
        assert_eq!(package.data[1], 1.0);
    }
}
