use super::errors::ConfigurationError;

/// The closed set of configuration keys injected at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    FirebaseApiKey,
    FirebaseAuthDomain,
    FirebaseProjectId,
    FirebaseStorageBucket,
    FirebaseMessagingSenderId,
    FirebaseAppId,
    FirebaseMeasurementId,
    AdminEmail,
    FormspreeId,
    SiteUrl,
    SiteName,
    SiteDescription,
}

impl ConfigKey {
    /// Every key, in declaration order.
    pub const ALL: [ConfigKey; 12] = [
        ConfigKey::FirebaseApiKey,
        ConfigKey::FirebaseAuthDomain,
        ConfigKey::FirebaseProjectId,
        ConfigKey::FirebaseStorageBucket,
        ConfigKey::FirebaseMessagingSenderId,
        ConfigKey::FirebaseAppId,
        ConfigKey::FirebaseMeasurementId,
        ConfigKey::AdminEmail,
        ConfigKey::FormspreeId,
        ConfigKey::SiteUrl,
        ConfigKey::SiteName,
        ConfigKey::SiteDescription,
    ];

    /// Dotted name used in the record shape, e.g. `firebase.apiKey`.
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::FirebaseApiKey => "firebase.apiKey",
            ConfigKey::FirebaseAuthDomain => "firebase.authDomain",
            ConfigKey::FirebaseProjectId => "firebase.projectId",
            ConfigKey::FirebaseStorageBucket => "firebase.storageBucket",
            ConfigKey::FirebaseMessagingSenderId => "firebase.messagingSenderId",
            ConfigKey::FirebaseAppId => "firebase.appId",
            ConfigKey::FirebaseMeasurementId => "firebase.measurementId",
            ConfigKey::AdminEmail => "admin.email",
            ConfigKey::FormspreeId => "formspree.id",
            ConfigKey::SiteUrl => "site.url",
            ConfigKey::SiteName => "site.name",
            ConfigKey::SiteDescription => "site.description",
        }
    }

    /// Environment variable the value is read from.
    ///
    /// The build tool only exposes variables carrying the `VITE_` prefix.
    pub fn env_var(self) -> &'static str {
        match self {
            ConfigKey::FirebaseApiKey => "VITE_FIREBASE_API_KEY",
            ConfigKey::FirebaseAuthDomain => "VITE_FIREBASE_AUTH_DOMAIN",
            ConfigKey::FirebaseProjectId => "VITE_FIREBASE_PROJECT_ID",
            ConfigKey::FirebaseStorageBucket => "VITE_FIREBASE_STORAGE_BUCKET",
            ConfigKey::FirebaseMessagingSenderId => "VITE_FIREBASE_MESSAGING_SENDER_ID",
            ConfigKey::FirebaseAppId => "VITE_FIREBASE_APP_ID",
            ConfigKey::FirebaseMeasurementId => "VITE_FIREBASE_MEASUREMENT_ID",
            ConfigKey::AdminEmail => "VITE_ADMIN_EMAIL",
            ConfigKey::FormspreeId => "VITE_FORMSPREE_ID",
            ConfigKey::SiteUrl => "VITE_SITE_URL",
            ConfigKey::SiteName => "VITE_SITE_NAME",
            ConfigKey::SiteDescription => "VITE_SITE_DESCRIPTION",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfigurationError;

    /// Accepts either the dotted name or the environment variable name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == s || key.env_var() == s)
            .ok_or_else(|| ConfigurationError::UnknownKey(s.to_string()))
    }
}
