//! Sports walker athletic profile.

use workouts::models::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Defaults to 150 steps a minute, about 5.85 km/h.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per hour.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 9_000.0,
            variance: 0.12,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn actions_per_hour(&self) -> f64 {
        self.cadence
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
