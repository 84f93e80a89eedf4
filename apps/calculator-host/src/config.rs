//! Layered host configuration.
//!
//! Precedence: defaults -> YAML file -> env (`CALC_HOST__*`) -> CLI overrides.

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `CALC_HOST__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALC_HOST__";

/// Env key (after the prefix) read verbatim. figment types env values, which
/// turns an all-digit entry parameter into an integer and drops its leading
/// zeros.
const DEFAULT_PARAM_ENV_KEY: &str = "ENTRY__DEFAULT_PARAM";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub logging: LoggingConfig,
    pub entry: EntryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    pub format: LogFormat,

    pub ansi: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntryConfig {
    /// Parameter handed to `Load` when the command line gives none.
    pub default_param: String,
}

fn default_level() -> String {
    "info".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            ansi: false,
        }
    }
}

impl HostConfig {
    /// Load the layered configuration.
    ///
    /// # Errors
    ///
    /// Fails when `path` is given but is not a file, or when the merged
    /// configuration does not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::from_figment(Self::figment(path)?)?;
        config.apply_raw_env(|key| Env::var(&format!("{ENV_PREFIX}{key}")));
        Ok(config)
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        Ok(figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&[DEFAULT_PARAM_ENV_KEY])
                .split("__"),
        ))
    }

    fn apply_raw_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(param) = lookup(DEFAULT_PARAM_ENV_KEY) {
            self.entry.default_param = param;
        }
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .context("failed to load host configuration")
    }

    /// Apply `-v` counts on top of the configured log level.
    pub fn apply_cli_overrides(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}
