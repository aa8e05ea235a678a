//! Runner athletic profile.

use workouts::models::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Defaults to 15,000 steps an hour, which covers 9.75 km.
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per hour.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 15_000.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence.
    ///
    /// # Arguments
    /// * `steps_per_minute` - Running cadence (e.g., 180.0)
    pub fn with_cadence(steps_per_minute: f64) -> Self {
        Self {
            cadence: steps_per_minute * 60.0,
            ..Default::default()
        }
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn actions_per_hour(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        assert_eq!(profile.kind(), ActivityKind::Running);
        assert!((profile.actions_per_hour() - 15_000.0).abs() < 0.01);
    }

    #[test]
    fn test_with_cadence() {
        let profile = RunnerProfile::with_cadence(180.0);
        assert!((profile.actions_per_hour() - 10_800.0).abs() < 0.01);
    }
}
