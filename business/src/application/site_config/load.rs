use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::site_config::errors::{ConfigurationError, env_var_list};
use crate::domain::site_config::model::{SiteConfig, missing_keys};
use crate::domain::site_config::source::EnvironmentSource;
use crate::domain::site_config::use_cases::load::LoadConfigurationUseCase;
use crate::domain::site_config::value_objects::ValidationPolicy;

pub struct LoadConfigurationUseCaseImpl {
    pub source: Arc<dyn EnvironmentSource>,
    pub logger: Arc<dyn Logger>,
    pub policy: ValidationPolicy,
}

impl LoadConfigurationUseCase for LoadConfigurationUseCaseImpl {
    fn execute(&self) -> Result<SiteConfig, ConfigurationError> {
        self.logger
            .info(&format!("Loading site configuration ({} policy)", self.policy));

        let missing = missing_keys(self.source.as_ref());
        if !missing.is_empty() {
            let names = env_var_list(&missing);
            match self.policy {
                ValidationPolicy::Strict => self
                    .logger
                    .error(&format!("Missing configuration keys: {}", names)),
                ValidationPolicy::Lenient => self
                    .logger
                    .warn(&format!("Missing configuration keys defaulted to empty: {}", names)),
            }
        }

        let config = SiteConfig::from_source(self.source.as_ref(), self.policy)?;

        for (key, value) in config.entries() {
            if value.is_empty() {
                self.logger.debug(&format!("Configuration key {} is empty", key));
            }
        }

        self.logger.info(&format!(
            "Site configuration loaded ({} keys)",
            config.entries().len()
        ));
        Ok(config)
    }
}
