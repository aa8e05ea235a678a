//! Athletic performance profiles.
//!
//! Profiles define realistic cadences and variance for each activity kind.
//! They are used by the package generator to produce plausible action counts.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::models::ActivityKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The activity kind they describe
/// - Actions (steps or strokes) per hour at a steady effort
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> ActivityKind;

    /// Steps or strokes per hour at a steady effort.
    fn actions_per_hour(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Action count for a workout of the given length, scaled by a sampled variance factor.
pub fn actions_for_duration(
    profile: &dyn AthleteProfile,
    duration_hours: f64,
    variance_factor: f64,
) -> u32 {
    let actions = profile.actions_per_hour() * duration_hours * variance_factor;
    actions.round().max(0.0) as u32
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_sample_variance_bounds() {
        let profile = RunnerProfile::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_actions_for_duration() {
        let profile = WalkerProfile::default();
        assert_eq!(actions_for_duration(&profile, 1.0, 1.0), 9000);
        assert_eq!(actions_for_duration(&profile, 0.5, 1.0), 4500);
        assert_eq!(actions_for_duration(&profile, 1.0, 1.1), 9900);
    }
}
