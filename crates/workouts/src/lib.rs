//! Workout statistics for running, walking and swimming.
//!
//! A sensor package is a three-letter code plus positional values. [`packages::read_package`]
//! turns it into a [`training::Workout`], whose [`training::Training`] methods compute
//! distance, mean speed and calories, and [`info_message::InfoMessage`] renders the summary.
//!
//! ```rust,ignore
//! use workouts::{packages::read_package, training::Training};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.show_training_info().message());
//! ```

pub mod config;
pub mod errors;
pub mod info_message;
pub mod models;
pub mod packages;
pub mod training;

use std::io::Write;

use tracing::{info, warn};

use crate::{
    config::OutputFormat,
    errors::WorkoutResult,
    models::SensorPackage,
    training::{Training, Workout},
};

/// Outcome of processing a batch of packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub processed: usize,
    pub rejected: usize,
}

/// Writes one summary per package to `out`, in input order.
///
/// A package that cannot be read is logged and skipped; write failures abort the run.
pub fn run(
    packages: &[SensorPackage],
    output: OutputFormat,
    out: &mut impl Write,
) -> WorkoutResult<RunReport> {
    let mut report = RunReport::default();

    for (index, package) in packages.iter().enumerate() {
        let workout = match Workout::try_from(package) {
            Ok(workout) => workout,
            Err(e) if e.is_package_error() => {
                warn!(index, code = %package.workout_type, "Package rejected: {e}");
                report.rejected += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let summary = workout.show_training_info();
        match output {
            OutputFormat::Text => writeln!(out, "{}", summary.message())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&summary)?)?,
        }
        report.processed += 1;
    }

    info!(
        processed = report.processed,
        rejected = report.rejected,
        "Packages processed"
    );
    Ok(report)
}
