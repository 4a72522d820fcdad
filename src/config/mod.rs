pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, LOG_LEVELS};

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "movies.json";
pub const DEFAULT_BASE_PATH: &str = ".";

/// Settings for one counting run after flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub input_path: String,
    pub base_path: String,
    pub verbose: bool,
    pub monitor: bool,
    pub log_level: Option<String>,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            verbose: false,
            monitor: false,
            log_level: None,
        }
    }
}

impl CountConfig {
    pub fn with_input(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    /// Flags win over the config file, which wins over the defaults.
    pub fn merge(
        input: Option<&str>,
        verbose: bool,
        monitor: bool,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            input_path: input
                .or_else(|| file.and_then(TomlConfig::input_path))
                .map(str::to_string)
                .unwrap_or(defaults.input_path),
            base_path: file
                .and_then(TomlConfig::base_path)
                .map(str::to_string)
                .unwrap_or(defaults.base_path),
            verbose,
            monitor: monitor || file.map(TomlConfig::monitoring_enabled).unwrap_or(false),
            log_level: file.and_then(TomlConfig::log_level).map(str::to_string),
        }
    }
}

impl ConfigProvider for CountConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}

impl Validate for CountConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        validation::validate_path("base_path", &self.base_path)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "movie-count")]
#[command(about = "Count the movie records in a JSON file")]
pub struct CliConfig {
    /// JSON file holding an array of movie records [default: movies.json]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage for each phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<CountConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let config = CountConfig::merge(
            self.input.as_deref(),
            self.verbose,
            self.monitor,
            file.as_ref(),
        );
        config.validate()?;
        Ok(config)
    }
}
