//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server: ServerConfig,
    pub messenger: MessengerConfig,
    pub dialogflow: DialogflowConfig,
    pub router: RouterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MessengerConfig {
    pub page_access_token: Option<String>,
    pub verify_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DialogflowConfig {
    pub project_id: Option<String>,
    pub access_token: Option<String>,
    pub language_code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RouterConfig {
    pub trigger_keyword: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 3000 },
            messenger: MessengerConfig {
                page_access_token: None,
                verify_token: None,
            },
            dialogflow: DialogflowConfig {
                project_id: None,
                access_token: None,
                language_code: "en".to_string(),
            },
            router: RouterConfig {
                trigger_keyword: "gemini".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables, starting from defaults
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        if let Ok(token) = std::env::var("PAGE_ACCESS_TOKEN") {
            config.messenger.page_access_token = Some(token);
        }
        if let Ok(token) = std::env::var("VERIFY_TOKEN") {
            config.messenger.verify_token = Some(token);
        }
        if let Ok(project) = std::env::var("DIALOGFLOW_PROJECT_ID") {
            config.dialogflow.project_id = Some(project);
        }
        if let Ok(token) = std::env::var("DIALOGFLOW_ACCESS_TOKEN") {
            config.dialogflow.access_token = Some(token);
        }

        config
    }

    /// Fail fast when a required credential is missing.
    ///
    /// Returns the validated credentials so callers get owned values
    /// instead of re-unwrapping options.
    pub fn validate(&self) -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            page_access_token: self
                .messenger
                .page_access_token
                .clone()
                .ok_or_else(|| ConfigError::MissingField("messenger.page-access-token".into()))?,
            verify_token: self
                .messenger
                .verify_token
                .clone()
                .ok_or_else(|| ConfigError::MissingField("messenger.verify-token".into()))?,
            dialogflow_project_id: self
                .dialogflow
                .project_id
                .clone()
                .ok_or_else(|| ConfigError::MissingField("dialogflow.project-id".into()))?,
            dialogflow_access_token: self
                .dialogflow
                .access_token
                .clone()
                .ok_or_else(|| ConfigError::MissingField("dialogflow.access-token".into()))?,
        })
    }
}

/// Required credentials, present after validation
#[derive(Debug, Clone)]
pub struct Credentials {
    pub page_access_token: String,
    pub verify_token: String,
    pub dialogflow_project_id: String,
    pub dialogflow_access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        let mut config = Config::default();
        config.messenger.page_access_token = Some("page-token".into());
        config.messenger.verify_token = Some("verify-token".into());
        config.dialogflow.project_id = Some("my-project".into());
        config.dialogflow.access_token = Some("df-token".into());
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dialogflow.language_code, "en");
        assert_eq!(config.router.trigger_keyword, "gemini");
    }

    #[test]
    fn test_validate_passes_with_all_credentials() {
        let creds = full_config().validate().unwrap();
        assert_eq!(creds.page_access_token, "page-token");
        assert_eq!(creds.verify_token, "verify-token");
        assert_eq!(creds.dialogflow_project_id, "my-project");
    }

    #[test]
    fn test_validate_rejects_missing_page_token() {
        let mut config = full_config();
        config.messenger.page_access_token = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(f)) if f.contains("page-access-token")
        ));
    }

    #[test]
    fn test_validate_rejects_missing_project_id() {
        let mut config = full_config();
        config.dialogflow.project_id = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = full_config();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(
            parsed.messenger.verify_token,
            config.messenger.verify_token
        );
        assert_eq!(parsed.router.trigger_keyword, "gemini");
    }
}
