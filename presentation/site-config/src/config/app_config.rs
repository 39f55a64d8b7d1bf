use std::env;
use std::path::PathBuf;

use business::domain::site_config::value_objects::ValidationPolicy;

/// Bootstrap settings for the loader itself
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env_file: Option<PathBuf>,
    pub policy: ValidationPolicy,
}

impl AppConfig {
    /// Load bootstrap configuration from environment variables
    ///
    /// Environment variables:
    /// - SITE_CONFIG_ENV_FILE: dotenv file to read instead of the process environment
    /// - SITE_CONFIG_LENIENT: "true" or "1" fills absent keys with "" (default: strict)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_file = lookup("SITE_CONFIG_ENV_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        let lenient = lookup("SITE_CONFIG_LENIENT")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Self {
            env_file,
            policy: if lenient {
                ValidationPolicy::Lenient
            } else {
                ValidationPolicy::Strict
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}
