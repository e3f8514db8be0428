/*
[INPUT]:  YAML configuration file and MOMENTUM__* environment variables
[OUTPUT]: Parsed board configuration and a configured MomentumClient
[POS]:    Configuration layer - API endpoint, credentials, board and log settings
[UPDATE]: When adding new configuration options
[UPDATE]: 2026-10-14 Layer environment overrides on top of the YAML file
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use momentum_adapter::{ClientConfig, Credentials, DEFAULT_BASE_URL, MomentumClient};
use serde::{Deserialize, Serialize};

use crate::board::TaskSource;

/// Prefix of environment overrides, e.g. `MOMENTUM__API__TOKEN`
pub const ENV_PREFIX: &str = "MOMENTUM";

/// Top-level configuration for the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub log: LogConfig,
}

/// Remote API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardSettings {
    #[serde(default)]
    pub task_source: TaskSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive used when `--log-level` is not given
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Also append log lines to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BoardConfig {
    /// `<config_dir>/momentum/board.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("momentum").join("board.yaml"))
    }

    /// Load configuration with environment overrides
    ///
    /// An explicit `path` must exist. Without one the default path is used
    /// when present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
            }
            None => {
                if let Some(default_path) = Self::default_path() {
                    builder = builder.add_source(
                        File::from(default_path)
                            .format(FileFormat::Yaml)
                            .required(false),
                    );
                }
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("read configuration sources")?;
        let parsed: Self = config
            .try_deserialize()
            .context("parse board configuration")?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Load configuration from a YAML file only
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config to yaml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        if self.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            anyhow::bail!("api.connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    /// Bearer credentials, if a non-blank token is configured
    pub fn credentials(&self) -> Option<Credentials> {
        self.api
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Credentials::bearer)
    }

    pub fn build_client(&self) -> Result<MomentumClient> {
        let mut client =
            MomentumClient::with_config(self.client_config()).context("create MomentumClient")?;
        if let Some(credentials) = self.credentials() {
            client.set_credentials(credentials);
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "momentum-board-{}-{name}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.board.task_source, TaskSource::Remote);
        assert_eq!(config.log.level, "info");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_from_file_partial_yaml() {
        let path = write_temp(
            "partial",
            "api:\n  token: \"  abc-123  \"\nboard:\n  task_source: mock\n",
        );
        let config = BoardConfig::from_file(&path).expect("config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.board.task_source, TaskSource::Mock);
        assert_eq!(
            config.credentials(),
            Some(Credentials::bearer("abc-123"))
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let path = write_temp(
            "explicit",
            "api:\n  base_url: http://127.0.0.1:9/api\n  timeout_secs: 5\nlog:\n  level: debug\n",
        );
        let config = BoardConfig::load(Some(&path)).expect("config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api.base_url, "http://127.0.0.1:9/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.log.level, "debug");

        let client = config.build_client().expect("client");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9/api/");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join("momentum-board-does-not-exist.yaml");
        assert!(BoardConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let path = write_temp("zero-timeout", "api:\n  timeout_secs: 0\n");
        let result = BoardConfig::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_roundtrip_skips_empty_token() {
        let yaml = BoardConfig::default().to_yaml().expect("yaml");
        assert!(!yaml.contains("token"));
        let parsed: BoardConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(parsed, BoardConfig::default());
    }
}
