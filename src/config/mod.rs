#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, Credentials};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub json: bool,
}

/// 合併 CLI、環境變數與 TOML 之後的最終設定
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
    pub logging: LogSettings,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
            token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
            logging: LogSettings::default(),
        }
    }
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("logging", &self.logging)
            .finish()
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = &self.token {
            return Some(Credentials::Bearer {
                token: token.clone(),
            });
        }
        self.username.as_ref().map(|username| Credentials::Basic {
            username: username.clone(),
            password: self.password.clone().unwrap_or_default(),
        })
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 3600)?;

        match (&self.username, &self.password) {
            (Some(username), Some(_)) => validate_non_empty_string("username", username)?,
            (Some(_), None) => {
                return Err(ClientError::MissingConfigError {
                    field: "password".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(ClientError::MissingConfigError {
                    field: "username".to_string(),
                })
            }
            (None, None) => {}
        }

        if let Some(token) = &self.token {
            validate_non_empty_string("token", token)?;
            if self.username.is_some() {
                return Err(ClientError::ConfigValidationError {
                    field: "token".to_string(),
                    message: "basic auth and token auth are mutually exclusive".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = ClientSettings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.credentials().is_none());
    }

    #[test]
    fn test_basic_auth_requires_both_parts() {
        let settings = ClientSettings {
            username: Some("admin".to_string()),
            ..ClientSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ClientError::MissingConfigError { ref field }) if field == "password"
        ));
    }

    #[test]
    fn test_token_and_basic_auth_conflict() {
        let settings = ClientSettings {
            username: Some("admin".to_string()),
            password: Some("admin".to_string()),
            token: Some("abc".to_string()),
            ..ClientSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_token_wins_over_basic_credentials() {
        let settings = ClientSettings {
            token: Some("abc".to_string()),
            ..ClientSettings::default()
        };
        assert_eq!(
            settings.credentials(),
            Some(Credentials::Bearer {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let settings = ClientSettings {
            username: Some("admin".to_string()),
            password: Some("s3cret".to_string()),
            ..ClientSettings::default()
        };
        assert!(!format!("{:?}", settings).contains("s3cret"));
    }
}
