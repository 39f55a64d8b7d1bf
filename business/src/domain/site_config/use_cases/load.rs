use crate::domain::site_config::errors::ConfigurationError;
use crate::domain::site_config::model::SiteConfig;

pub trait LoadConfigurationUseCase: Send + Sync {
    fn execute(&self) -> Result<SiteConfig, ConfigurationError>;
}
