// File: src/config.rs
// Purpose: Configuration parsing from signup-forms.toml

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::login::Credential;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub registration: RegistrationConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Login allow-list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_credentials")]
    pub credentials: Vec<Credential>,
}

/// Registration behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Delay between a successful submit and the move to the login view
    #[serde(default = "default_navigation_delay_ms")]
    pub navigation_delay_ms: u64,
}

/// Paths handed to the navigator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_login_route")]
    pub login: String,
}

// Default values
fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("admin@example.com", "Admin12345!"),
        Credential::new("user@example.com", "User12345!"),
    ]
}

fn default_navigation_delay_ms() -> u64 {
    2000
}

fn default_login_route() -> String {
    "/login".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials: default_credentials(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            navigation_delay_ms: default_navigation_delay_ms(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: default_login_route(),
        }
    }
}

impl RegistrationConfig {
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            warn!(path = %path.display(), "config file is empty, using defaults");
            return Ok(Self::default());
        }

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(
            path = %path.display(),
            credentials = config.auth.credentials.len(),
            navigation_delay_ms = config.registration.navigation_delay_ms,
            "config loaded"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.registration.navigation_delay_ms == 0 {
            bail!("registration.navigation_delay_ms must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.auth.credentials.len(), 2);
        assert_eq!(config.registration.navigation_delay(), Duration::from_millis(2000));
        assert_eq!(config.routes.login, "/login");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.auth.credentials.len(), 2);
        assert_eq!(config.registration.navigation_delay_ms, 2000);
    }

    #[test]
    fn test_custom_values() {
        let toml = r#"
            [auth]
            credentials = [{ email = "qa@example.com", password = "Qa1234567!" }]

            [registration]
            navigation_delay_ms = 500

            [routes]
            login = "/auth/login"
        "#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(
            config.auth.credentials,
            vec![Credential::new("qa@example.com", "Qa1234567!")]
        );
        assert_eq!(config.registration.navigation_delay(), Duration::from_millis(500));
        assert_eq!(config.routes.login, "/auth/login");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/signup-forms.toml").unwrap();
        assert_eq!(config.registration.navigation_delay_ms, 2000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "signup-forms-malformed-{}.toml",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[registration]\nnavigation_delay_ms = \"soon\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_zero_navigation_delay_is_rejected() {
        let err = Config::parse("[registration]\nnavigation_delay_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        let path = std::env::temp_dir().join(format!(
            "signup-forms-zero-delay-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[registration]\nnavigation_delay_ms = 0\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(format!("{:#}", err).contains("greater than zero"));

        fs::remove_file(&path).unwrap();
    }
}
