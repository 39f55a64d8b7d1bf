use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use environment::dotenv_file::DotenvFile;
use environment::process::ProcessEnvironment;
use logger::TracingLogger;

use business::application::site_config::load::LoadConfigurationUseCaseImpl;
use business::domain::site_config::source::EnvironmentSource;
use business::domain::site_config::use_cases::load::LoadConfigurationUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub load_configuration: Arc<dyn LoadConfigurationUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let source: Arc<dyn EnvironmentSource> = match &config.env_file {
            Some(path) => Arc::new(dotenv_source(path)?),
            None => Arc::new(ProcessEnvironment::new()),
        };

        let load_configuration = Arc::new(LoadConfigurationUseCaseImpl {
            source,
            logger,
            policy: config.policy,
        });

        Ok(Self { load_configuration })
    }
}

/// Reads the dotenv file, warning when it defines no variables at all.
fn dotenv_source(path: &Path) -> anyhow::Result<DotenvFile> {
    let file = DotenvFile::load(path).with_context(|| format!("reading {}", path.display()))?;
    if file.is_empty() {
        tracing::warn!("{} defines no variables", file.path().display());
    } else {
        tracing::info!("Using {} variables from {}", file.len(), file.path().display());
    }
    Ok(file)
}
