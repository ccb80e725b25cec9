//! Settings loader for ~/.config/marquee/config.toml
//!
//! Layered: file values (the file is optional), then environment
//! overrides, then validation. The API token has no default and must come
//! from one of the two layers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use marquee_api::TmdbClient;
use marquee_core::prelude::*;

const CONFIG_DIR: &str = "marquee";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment override for the API token.
pub const TOKEN_ENV: &str = "TMDB_API_TOKEN";
/// Environment override for the response language.
pub const LANGUAGE_ENV: &str = "MARQUEE_LANGUAGE";

fn default_language() -> String {
    "en-US".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

/// Global application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// TMDB v4 read access token (bearer auth).
    #[serde(default)]
    pub api_token: String,

    /// Response language passed on every request.
    #[serde(default = "default_language")]
    pub language: String,

    /// API base URL. Overridable for tests only.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            language: default_language(),
            base_url: default_base_url(),
        }
    }
}

impl Settings {
    /// Load settings: config file (optional) → env overrides → validation.
    pub fn load() -> Result<Self> {
        let mut settings = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Settings::default(),
        };
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a specific file; defaults if it doesn't exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config file at {:?}, using defaults", path);
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)
            .map_err(|e| Error::config_invalid(format!("failed to parse {path:?}: {e}")))?;
        debug!("loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Apply environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                self.api_token = token;
            }
        }
        if let Ok(language) = std::env::var(LANGUAGE_ENV) {
            if !language.is_empty() {
                self.language = language;
            }
        }
    }

    /// Check the settings are usable: a token is present and the base URL
    /// parses.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            return Err(Error::config(format!(
                "missing API token: set api_token in config.toml or the {TOKEN_ENV} env var"
            )));
        }
        Url::parse(&self.base_url)
            .map_err(|e| Error::config_invalid(format!("invalid base_url: {e}")))?;
        Ok(())
    }

    /// Build a TMDB client configured from these settings.
    pub fn client(&self) -> TmdbClient {
        TmdbClient::new(self.api_token.clone())
            .with_base_url(self.base_url.clone())
            .with_language(self.language.clone())
    }
}

/// Default config file location: `<config dir>/marquee/config.toml`.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        std::env::remove_var(TOKEN_ENV);
        std::env::remove_var(LANGUAGE_ENV);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, "en-US");
        assert_eq!(settings.base_url, "https://api.themoviedb.org/3");
        assert!(settings.api_token.is_empty());
    }

    #[test]
    fn test_from_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = Settings::from_file(&temp.path().join("config.toml")).unwrap();
        assert_eq!(settings.language, "en-US");
    }

    #[test]
    fn test_from_file_partial_overrides() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "api_token = \"abc\"\nlanguage = \"de-DE\"\n").unwrap();
        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.api_token, "abc");
        assert_eq!(settings.language, "de-DE");
        // Unset keys keep their defaults.
        assert_eq!(settings.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "api_token = [not toml").unwrap();
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_values() {
        clear_env();
        std::env::set_var(TOKEN_ENV, "env-token");
        std::env::set_var(LANGUAGE_ENV, "fr-FR");
        let mut settings = Settings {
            api_token: "file-token".to_string(),
            ..Settings::default()
        };
        settings.apply_env_overrides();
        assert_eq!(settings.api_token, "env-token");
        assert_eq!(settings.language, "fr-FR");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_env_var_does_not_override() {
        clear_env();
        std::env::set_var(TOKEN_ENV, "");
        let mut settings = Settings {
            api_token: "file-token".to_string(),
            ..Settings::default()
        };
        settings.apply_env_overrides();
        assert_eq!(settings.api_token, "file-token");
        clear_env();
    }

    #[test]
    fn test_validate_requires_token() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());

        let settings = Settings {
            api_token: "abc".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_client_carries_settings_values() {
        let settings = Settings {
            api_token: "abc".to_string(),
            language: "de-DE".to_string(),
            base_url: "http://127.0.0.1:8080/v3".to_string(),
        };
        let client = settings.client();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/v3");
        assert_eq!(client.language(), "de-DE");
    }

    #[test]
    fn test_validate_rejects_unparseable_base_url() {
        let settings = Settings {
            api_token: "abc".to_string(),
            base_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
