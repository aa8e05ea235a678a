//! Package generators for test data.
//!
//! - [`PackageGenerator`]: random but plausible sensor packages for every activity kind

pub mod package;

pub use package::PackageGenerator;
