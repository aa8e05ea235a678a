//! Test data generation for workouts.
//!
//! This crate produces randomized sensor packages for every activity kind, reproducible
//! for a given seed, to exercise the `workouts` binary beyond its built-in packages.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let packages = PackageGenerator::new(SeedConfig::default()).generate_all();
//! std::fs::write("packages.json", serde_json::to_string_pretty(&packages)?)?;
//! ```
//!
//! Then run `WORKOUT_PACKAGES=packages.json cargo run -p workouts`.

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::models::{ActivityKind, SensorPackage};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, ValueRange};
    pub use crate::generators::PackageGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, actions_for_duration,
        sample_variance,
    };
    pub use crate::{ActivityKind, SensorPackage};
}
