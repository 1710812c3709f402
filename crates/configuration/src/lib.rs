use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{BonusSchedule, Config, ReportSettings, Strategies};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `SALES_REPORT__REPORT__TOP_PRODUCTS_LIMIT=5`.
pub const ENV_PREFIX: &str = "SALES_REPORT";

/// Loads the application configuration.
///
/// An explicit `path` must exist. Without one, `config.toml` is read if present
/// and built-in defaults are used otherwise. Environment variables override
/// both. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Checks the report settings serde cannot express.
///
/// Strategy parameters are validated by the strategy constructors.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.report.top_products_limit == 0 {
        return Err(ConfigError::ValidationError(
            "report.top_products_limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
