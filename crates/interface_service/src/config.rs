//! Service configuration

use serde::Deserialize;

use core_kernel::{CoreError, SupportedYears};

/// Prefix of the environment variables read by `ServiceConfig::from_env`
pub const ENV_PREFIX: &str = "CARINS";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Earliest year accepted by the validity check
    pub min_supported_year: i32,
    /// Latest year accepted by the validity check
    pub max_supported_year: i32,
    /// Default filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_supported_year: SupportedYears::DEFAULT_MIN,
            max_supported_year: SupportedYears::DEFAULT_MAX,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(None)
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment when `vars` is `Some`
    pub fn from_vars(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the validated supported year range
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if the minimum year exceeds the maximum
    pub fn supported_years(&self) -> Result<SupportedYears, CoreError> {
        Ok(SupportedYears::new(self.min_supported_year, self.max_supported_year)?)
    }
}
