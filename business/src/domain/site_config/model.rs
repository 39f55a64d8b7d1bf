use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use super::errors::ConfigurationError;
use super::keys::ConfigKey;
use super::source::EnvironmentSource;
use super::value_objects::ValidationPolicy;

const FORMSPREE_ENDPOINT_BASE: &str = "https://formspree.io/f/";

/// Firebase web client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseSettings {
    api_key: String,
    auth_domain: String,
    project_id: String,
    storage_bucket: String,
    messaging_sender_id: String,
    app_id: String,
    measurement_id: String,
}

impl FirebaseSettings {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
    pub fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }
    pub fn messaging_sender_id(&self) -> &str {
        &self.messaging_sender_id
    }
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }
}

/// Operator contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSettings {
    email: String,
}

impl AdminSettings {
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Form-submission endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormspreeSettings {
    id: String,
}

impl FormspreeSettings {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Submission endpoint for the form id, `None` when no id is configured.
    pub fn endpoint(&self) -> Option<String> {
        if self.id.is_empty() {
            return None;
        }
        Some(format!("{}{}", FORMSPREE_ENDPOINT_BASE, self.id))
    }
}

/// Public metadata of the deployed site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    url: String,
    name: String,
    description: String,
}

impl SiteMetadata {
    pub fn url(&self) -> &str {
        &self.url
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical URL parsed for consumers. Loading never depends on this.
    pub fn parsed_url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }
}

/// Immutable snapshot of the site configuration.
///
/// Every key is populated at construction and the record exposes no way to
/// change a value afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    firebase: FirebaseSettings,
    admin: AdminSettings,
    formspree: FormspreeSettings,
    site: SiteMetadata,
}

impl SiteConfig {
    /// Reads every key from `source`.
    ///
    /// Values are kept exactly as the source returns them. Under
    /// [`ValidationPolicy::Strict`] all absent keys are reported together;
    /// under [`ValidationPolicy::Lenient`] they become empty strings.
    pub fn from_source(
        source: &dyn EnvironmentSource,
        policy: ValidationPolicy,
    ) -> Result<Self, ConfigurationError> {
        let mut values = BTreeMap::new();
        let mut missing = Vec::new();

        for key in ConfigKey::ALL {
            match source.get(key.env_var()) {
                Some(value) => {
                    values.insert(key, value);
                }
                None => missing.push(key),
            }
        }

        if policy == ValidationPolicy::Strict && !missing.is_empty() {
            return Err(ConfigurationError::missing(missing));
        }

        let mut take = |key: ConfigKey| values.remove(&key).unwrap_or_default();

        Ok(Self {
            firebase: FirebaseSettings {
                api_key: take(ConfigKey::FirebaseApiKey),
                auth_domain: take(ConfigKey::FirebaseAuthDomain),
                project_id: take(ConfigKey::FirebaseProjectId),
                storage_bucket: take(ConfigKey::FirebaseStorageBucket),
                messaging_sender_id: take(ConfigKey::FirebaseMessagingSenderId),
                app_id: take(ConfigKey::FirebaseAppId),
                measurement_id: take(ConfigKey::FirebaseMeasurementId),
            },
            admin: AdminSettings {
                email: take(ConfigKey::AdminEmail),
            },
            formspree: FormspreeSettings {
                id: take(ConfigKey::FormspreeId),
            },
            site: SiteMetadata {
                url: take(ConfigKey::SiteUrl),
                name: take(ConfigKey::SiteName),
                description: take(ConfigKey::SiteDescription),
            },
        })
    }

    pub fn firebase(&self) -> &FirebaseSettings {
        &self.firebase
    }
    pub fn admin(&self) -> &AdminSettings {
        &self.admin
    }
    pub fn formspree(&self) -> &FormspreeSettings {
        &self.formspree
    }
    pub fn site(&self) -> &SiteMetadata {
        &self.site
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::FirebaseApiKey => &self.firebase.api_key,
            ConfigKey::FirebaseAuthDomain => &self.firebase.auth_domain,
            ConfigKey::FirebaseProjectId => &self.firebase.project_id,
            ConfigKey::FirebaseStorageBucket => &self.firebase.storage_bucket,
            ConfigKey::FirebaseMessagingSenderId => &self.firebase.messaging_sender_id,
            ConfigKey::FirebaseAppId => &self.firebase.app_id,
            ConfigKey::FirebaseMeasurementId => &self.firebase.measurement_id,
            ConfigKey::AdminEmail => &self.admin.email,
            ConfigKey::FormspreeId => &self.formspree.id,
            ConfigKey::SiteUrl => &self.site.url,
            ConfigKey::SiteName => &self.site.name,
            ConfigKey::SiteDescription => &self.site.description,
        }
    }

    /// All twelve `(key, value)` pairs in [`ConfigKey::ALL`] order.
    pub fn entries(&self) -> [(ConfigKey, &str); 12] {
        ConfigKey::ALL.map(|key| (key, self.get(key)))
    }
}

/// Strict load from an explicitly passed source.
pub fn load_configuration(source: &dyn EnvironmentSource) -> Result<SiteConfig, ConfigurationError> {
    SiteConfig::from_source(source, ValidationPolicy::Strict)
}

/// Keys the source does not provide, in [`ConfigKey::ALL`] order.
pub fn missing_keys(source: &dyn EnvironmentSource) -> Vec<ConfigKey> {
    ConfigKey::ALL
        .into_iter()
        .filter(|key| source.get(key.env_var()).is_none())
        .collect()
}
