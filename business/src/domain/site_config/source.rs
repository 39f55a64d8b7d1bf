use std::collections::{BTreeMap, HashMap};

/// Key-value store the configuration is read from.
///
/// Lookups use the environment variable name (see [`super::keys::ConfigKey::env_var`]).
pub trait EnvironmentSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

impl EnvironmentSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvironmentSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}
