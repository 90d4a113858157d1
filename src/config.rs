//! Configuration management for the login screen
//!
//! Separates the validator's reference data from runtime behavior. Values are
//! layered: built-in defaults, then an optional `config.toml`, then
//! environment variables prefixed with `MVP_LOGIN`.

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::time::Duration;

use crate::model::credentials::DEFAULT_CREDENTIALS;

const DEFAULT_SUCCESS_MESSAGE: &str = "登录成功";
const DEFAULT_FAILURE_MESSAGE: &str = "用户名或密码错误";
const DEFAULT_VALIDATION_TIMEOUT_MS: u64 = 5000;

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Reference pair and the texts reported for each outcome
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ValidatorConfig {
    pub username: String,
    pub password: String,

    /// Text shown when the pair matches
    pub success_message: String,

    /// Text shown for every non-matching pair
    pub failure_message: String,
}

/// How validation is scheduled
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Run the validator on a worker thread instead of the caller's
    /// Environment: MVP_LOGIN_RUNTIME__BACKGROUND_VALIDATION
    pub background_validation: bool,

    /// Upper bound on a background validation before it is reported as failed
    /// Environment: MVP_LOGIN_RUNTIME__VALIDATION_TIMEOUT_MS
    pub validation_timeout_ms: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_CREDENTIALS.username.clone(),
            password: DEFAULT_CREDENTIALS.password.clone(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            background_validation: false,
            validation_timeout_ms: DEFAULT_VALIDATION_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the named file (extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        Self::load_layered(path, None)
    }

    /// Load from `path`, reading overrides from `env` instead of the process
    /// environment when given.
    ///
    /// Env values stay strings until deserialized, so credentials such as
    /// `007` are kept byte-for-byte.
    pub(crate) fn load_layered(
        path: &str,
        env: Option<Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("MVP_LOGIN")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.validator.success_message.is_empty() {
            return Err(config::ConfigError::Message(
                "success_message cannot be empty".into(),
            ));
        }

        if self.validator.failure_message.is_empty() {
            return Err(config::ConfigError::Message(
                "failure_message cannot be empty".into(),
            ));
        }

        if self.runtime.validation_timeout_ms == 0 {
            return Err(config::ConfigError::Message(
                "validation_timeout_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl RuntimeConfig {
    /// Get the validation timeout as Duration
    pub fn validation_timeout(&self) -> Duration {
        Duration::from_millis(self.validation_timeout_ms)
    }
}
