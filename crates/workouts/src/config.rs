//! Runtime configuration read from the environment.

use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per workout.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WorkoutError::Config(format!(
                "WORKOUT_OUTPUT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON package file; the built-in packages are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, WorkoutError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WorkoutError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_path = get("WORKOUT_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let output = get("WORKOUT_OUTPUT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            packages_path,
            output,
        })
    }
}
