use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{
    config::Config,
    packages::{default_packages, load_packages},
    run,
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to read configuration")?;

    let packages = match &config.packages_path {
        Some(path) => load_packages(path)
            .with_context(|| format!("Failed to load packages from {}", path.display()))?,
        None => default_packages(),
    };

    tracing::info!("Processing {} packages", packages.len());

    let stdout = std::io::stdout();
    run(&packages, config.output, &mut stdout.lock())?;

    Ok(())
}
