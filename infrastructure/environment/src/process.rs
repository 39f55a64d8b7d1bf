use std::env::{self, VarError};

use business::domain::site_config::source::EnvironmentSource;

/// Reads variables from the current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!("environment.not_unicode: {} is ignored", name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_for_unset_variable() {
        let source = ProcessEnvironment::new();
        assert_eq!(source.get("SITE_CONFIG_TEST_UNSET_VARIABLE"), None);
    }

    #[test]
    fn should_read_variable_set_by_cargo() {
        let source = ProcessEnvironment::new();
        assert_eq!(
            source.get("CARGO_MANIFEST_DIR").as_deref(),
            Some(env!("CARGO_MANIFEST_DIR"))
        );
    }
}
