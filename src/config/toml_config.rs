use crate::utils::error::{CountError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub base_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| CountError::ConfigError {
                message: format!(
                    "Cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.as_ref().parent() {
            config.anchor_base_path(dir);
        }
        Ok(config)
    }

    /// A relative `input.base_path` is taken relative to the config file's directory.
    fn anchor_base_path(&mut self, config_dir: &Path) {
        if let Some(base) = &self.input.base_path {
            if !base.is_empty() && Path::new(base).is_relative() {
                self.input.base_path = Some(config_dir.join(base).to_string_lossy().into_owned());
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CountError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CountError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.input.base_path.as_deref()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(base) = self.base_path() {
            validation::validate_path("input.base_path", base)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_one_of("monitoring.log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
