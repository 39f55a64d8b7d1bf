use super::keys::ConfigKey;

/// Configuration errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("configuration.missing: {}", env_var_list(.keys))]
    Missing { keys: Vec<ConfigKey> },
    #[error("configuration.unknown_key: {0}")]
    UnknownKey(String),
}

impl ConfigurationError {
    pub fn missing(keys: Vec<ConfigKey>) -> Self {
        ConfigurationError::Missing { keys }
    }

    /// Keys reported as absent, empty for any other variant.
    pub fn missing_keys(&self) -> &[ConfigKey] {
        match self {
            ConfigurationError::Missing { keys } => keys,
            ConfigurationError::UnknownKey(_) => &[],
        }
    }
}

pub(crate) fn env_var_list(keys: &[ConfigKey]) -> String {
    keys.iter()
        .map(|k| k.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}
