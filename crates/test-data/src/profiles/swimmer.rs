//! Swimmer athletic profile.

use workouts::models::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Stroke counts follow a relaxed 12 strokes per minute; laps are independent because
/// pool speed is measured from geometry.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per hour.
    stroke_rate: f64,
    /// Pool lengths per hour in a 25 m pool.
    laps_per_hour: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 720.0,
            laps_per_hour: 40.0,
            variance: 0.1,
        }
    }
}

impl SwimmerProfile {
    /// Pool lengths for a session of the given length, rescaled for the pool size.
    pub fn laps_for(&self, duration_hours: f64, pool_length_m: f64, variance_factor: f64) -> f64 {
        let meters = self.laps_per_hour * 25.0 * duration_hours * variance_factor;
        (meters / pool_length_m).round().max(0.0)
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn actions_per_hour(&self) -> f64 {
        self.stroke_rate
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laps_scale_with_pool() {
        let profile = SwimmerProfile::default();
        assert_eq!(profile.laps_for(1.0, 25.0, 1.0), 40.0);
        assert_eq!(profile.laps_for(1.0, 50.0, 1.0), 20.0);
        assert_eq!(profile.laps_for(0.5, 25.0, 1.0), 20.0);
    }
}
