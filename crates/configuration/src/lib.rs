use crate::error::ConfigError;
use std::path::{Path, PathBuf};

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{
    AnalyticsSettings, DatasetSettings, LoggingSettings, QuadrantBaseline, RankingSettings,
    ServerSettings, Settings,
};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "INDEXSCOPE_CONFIG";
/// Prefix for per-key overrides, e.g. `INDEXSCOPE__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "INDEXSCOPE";

/// The configuration file to read: `$INDEXSCOPE_CONFIG`, or `config.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// layers environment overrides on top, deserializes it into our strongly-typed `Settings`
/// struct and validates it.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(builder)
}

/// Parses settings from TOML text, without environment overrides.
pub fn from_toml_str(toml: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
