use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// Activity kinds a sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Three-letter code used in sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Label shown in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn param_count(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields shared by every activity kind.
///
/// Duration is a divisor in every speed formula, so it must be finite and nonzero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Sample {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        if !duration.is_finite() || duration == 0.0 {
            return Err(WorkoutError::InvalidValue {
                field: "duration",
                value: duration,
            });
        }
        if !weight.is_finite() {
            return Err(WorkoutError::InvalidValue {
                field: "weight",
                value: weight,
            });
        }
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    /// Steps or strokes.
    pub fn action(&self) -> u32 {
        self.action
    }

    /// Hours.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A raw package as delivered by the sensor: a code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!("RUN".parse::<ActivityKind>().unwrap(), ActivityKind::Running);
        assert_eq!("WLK".parse::<ActivityKind>().unwrap(), ActivityKind::Walking);
        assert_eq!("SWM".parse::<ActivityKind>().unwrap(), ActivityKind::Swimming);
    }

    #[test]
    fn test_unknown_code() {
        let err = "run".parse::<ActivityKind>().unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivityCode(code) if code == "run"));
    }

    #[test]
    fn test_sample_rejects_zero_duration() {
        let err = Sample::new(1000, 0.0, 70.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidValue {
                field: "duration",
                ..
            }
        ));
        assert!(Sample::new(1000, f64::NAN, 70.0).is_err());
        assert!(Sample::new(1000, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_package_json() {
        let json = r#"{"workout_type":"SWM","data":[720,1,80,25,40]}"#;
        let package: SensorPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.workout_type, "SWM");
        assert_eq!(package.data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&ActivityKind::Walking).unwrap();
        assert_eq!(json, "\"WLK\"");
    }
}
