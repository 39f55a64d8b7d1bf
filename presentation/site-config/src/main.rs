use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Site configuration loader entry point
///
/// Loads the build-time site configuration once, validates it, and prints it
/// as JSON on stdout. Logs go to stderr so the output can be redirected into
/// the front-end build.
fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load bootstrap configuration
    let config = AppConfig::from_env();
    tracing::debug!(?config, "bootstrap configuration");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Load and render the site configuration
    let site_config = container.load_configuration.execute()?;
    println!("{}", serde_json::to_string_pretty(&site_config)?);

    Ok(())
}
