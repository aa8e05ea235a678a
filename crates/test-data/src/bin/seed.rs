//! Package seed script - writes generated sensor packages as JSON to stdout
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed > packages.json
//! WORKOUT_PACKAGES=packages.json cargo run -p workouts
//! ```

use std::io::Write;

use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env()?;
    tracing::info!(
        "Generating {} packages (seed {})",
        config.package_count,
        config.seed
    );

    let packages = PackageGenerator::new(config).generate_all();

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &packages)?;
    writeln!(stdout)?;

    tracing::info!("Seed completed!");
    Ok(())
}
