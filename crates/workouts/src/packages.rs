//! Sensor package dispatch.
//!
//! Maps a package's three-letter code to the matching calculator and builds it from the
//! package's positional values:
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height
//! - `SWM`: action, duration, weight, pool length, pool count

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    errors::{WorkoutError, WorkoutResult},
    models::{ActivityKind, Sample, SensorPackage},
    training::{Running, SportsWalking, Swimming, Workout},
};

/// Build the workout described by a sensor package.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Workout> {
    let kind: ActivityKind = workout_type.parse()?;

    if data.len() != kind.param_count() {
        return Err(WorkoutError::MalformedPackage {
            code: workout_type.to_string(),
            expected: kind.param_count(),
            actual: data.len(),
        });
    }

    let sample = Sample::new(action_count(data[0])?, data[1], data[2])?;

    let workout: Workout = match kind {
        ActivityKind::Running => Running::new(sample).into(),
        ActivityKind::Walking => {
            let height = finite("height", data[3])?;
            if height == 0.0 {
                return Err(WorkoutError::InvalidValue {
                    field: "height",
                    value: height,
                });
            }
            SportsWalking::new(sample, height).into()
        }
        ActivityKind::Swimming => Swimming::new(
            sample,
            finite("length_pool", data[3])?,
            finite("count_pool", data[4])?,
        )
        .into(),
    };

    debug!(code = workout_type, ?data, "Package read");
    Ok(workout)
}

impl TryFrom<&SensorPackage> for Workout {
    type Error = WorkoutError;

    fn try_from(package: &SensorPackage) -> Result<Self, Self::Error> {
        read_package(&package.workout_type, &package.data)
    }
}

/// Packages bundled with the binary, used when no package file is configured.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
    ]
}

/// Parse a JSON array of packages.
pub fn parse_packages(json: &str) -> WorkoutResult<Vec<SensorPackage>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON package file from disk.
pub fn load_packages(path: &Path) -> WorkoutResult<Vec<SensorPackage>> {
    let json = fs::read_to_string(path)?;
    let packages = parse_packages(&json)?;
    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Action counts arrive as numbers but must be whole and nonnegative.
fn action_count(value: f64) -> WorkoutResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)
    {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidValue {
            field: "action",
            value,
        })
    }
}

fn finite(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}
