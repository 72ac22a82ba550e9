//! Application configuration.

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::FALLBACK_TIMEZONE;
use crate::error::{CoreError, CoreResult};

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scheduling: SchedulingConfig,
    pub logging: LoggingConfig,
}

/// Scheduling defaults applied before a user has configured their own.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Timezone for accounts with none configured. Applied explicitly
    /// by callers; never substituted for an unknown identifier.
    pub default_timezone: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml` and
    /// environment variables, in that order of precedence: the file
    /// overrides the defaults and the environment overrides the file.
    /// Environment keys separate sections with `__`, as in
    /// `SCHEDULING__DEFAULT_TIMEZONE=Europe/Istanbul`.
    ///
    /// ## Errors
    /// Returns an error if building or deserializing the configuration
    /// fails, or if a loaded value fails validation.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            config::File::with_name("config.toml").required(false),
            config::Environment::default(),
        )
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("scheduling.default_timezone", FALLBACK_TIMEZONE)?
            .set_default("logging.level", "debug")?
            // TOML file
            .add_source(file)
            // Environment, added last so it wins over the file
            .add_source(
                env.convert_case(config::Case::Snake)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(settings.validated()?)
    }

    /// Checks cross-field constraints that deserialization cannot.
    fn validated(self) -> CoreResult<Self> {
        if self.scheduling.default_timezone.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "scheduling.default_timezone must not be empty".to_string(),
            ));
        }

        Ok(self)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file and environment variables.
///
/// ## Errors
/// Returns an error if loading or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        default_timezone = %settings.scheduling.default_timezone,
        log_level = %settings.logging.level,
        "configuration loaded"
    );

    Ok(settings)
}
