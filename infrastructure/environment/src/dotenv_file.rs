use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::site_config::source::EnvironmentSource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("environment.file_not_found: {0}")]
    FileNotFound(PathBuf),
    #[error("environment.file_read_error: {0}")]
    FileReadError(PathBuf),
    #[error("environment.file_parse_error: {path} line {line}")]
    FileParseError { path: PathBuf, line: usize },
}

/// Variables parsed from a dotenv file.
///
/// The file is read once at construction and the process environment is
/// left untouched.
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl DotenvFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvironmentError> {
        let path = path.as_ref().to_path_buf();
        let iter = dotenvy::from_path_iter(&path).map_err(|e| map_error(e, &path))?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| map_error(e, &path))?;
            values.insert(key, value);
        }

        tracing::debug!("Read {} variables from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EnvironmentSource for DotenvFile {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

fn map_error(error: dotenvy::Error, path: &Path) -> EnvironmentError {
    match error {
        dotenvy::Error::Io(io) if io.kind() == ErrorKind::NotFound => {
            EnvironmentError::FileNotFound(path.to_path_buf())
        }
        dotenvy::Error::LineParse(_, line) => EnvironmentError::FileParseError {
            path: path.to_path_buf(),
            line,
        },
        _ => EnvironmentError::FileReadError(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::site_config::model::load_configuration;
    use std::fs;

    fn write_env_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "site-config-{}-{}.env",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    const FULL_ENV: &str = r#"
VITE_FIREBASE_API_KEY=AIzaSyExample
VITE_FIREBASE_AUTH_DOMAIN=example.firebaseapp.com
VITE_FIREBASE_PROJECT_ID=example
VITE_FIREBASE_STORAGE_BUCKET=example.appspot.com
VITE_FIREBASE_MESSAGING_SENDER_ID=123456789
VITE_FIREBASE_APP_ID=1:123456789:web:abcdef
VITE_FIREBASE_MEASUREMENT_ID=G-ABCDEF
VITE_ADMIN_EMAIL=admin@example.com
VITE_FORMSPREE_ID=xyzabcd
VITE_SITE_URL=https://example.com
VITE_SITE_NAME="Example Site"
VITE_SITE_DESCRIPTION=
"#;

    #[test]
    fn should_load_configuration_from_dotenv_file() {
        // Arrange
        let path = write_env_file("full", FULL_ENV);

        // Act
        let source = DotenvFile::load(&path).unwrap();
        let config = load_configuration(&source).unwrap();
        fs::remove_file(&path).ok();

        // Assert
        assert_eq!(source.len(), 12);
        assert_eq!(config.firebase().project_id(), "example");
        assert_eq!(config.site().name(), "Example Site");
        assert_eq!(config.site().description(), "");
    }

    #[test]
    fn should_not_touch_process_environment() {
        let path = write_env_file("isolated", "SITE_CONFIG_DOTENV_ONLY=1\n");

        let source = DotenvFile::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(source.get("SITE_CONFIG_DOTENV_ONLY").as_deref(), Some("1"));
        assert!(std::env::var("SITE_CONFIG_DOTENV_ONLY").is_err());
    }

    #[test]
    fn should_return_not_found_for_missing_file() {
        let path = std::env::temp_dir().join("site-config-does-not-exist.env");

        let result = DotenvFile::load(&path);

        assert!(matches!(result, Err(EnvironmentError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn should_return_parse_error_for_malformed_line() {
        let path = write_env_file("malformed", "VITE_SITE_NAME value-without-equals\n");

        let result = DotenvFile::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EnvironmentError::FileParseError { .. })));
    }
}
