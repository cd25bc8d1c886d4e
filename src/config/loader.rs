//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{EngineError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with LEDGER)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("LEDGER")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| EngineError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| EngineError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.account.account_id, "ACC-0001");
        assert!(config.discounts.is_empty());
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.settings.log_level, "info");
    }
}
