//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::strategy::DiscountKind;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Account to open on startup
    #[serde(default)]
    pub account: AccountConfig,
    /// Discount strategies to register, in application order
    #[serde(default)]
    pub discounts: Vec<DiscountKind>,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Account configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Stable account identifier
    #[serde(default = "default_account_id")]
    pub account_id: String,
    /// Opening balance (must be non-negative)
    #[serde(default)]
    pub opening_balance: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            account_id: default_account_id(),
            opening_balance: Decimal::ZERO,
        }
    }
}

fn default_account_id() -> String {
    "ACC-0001".to_string()
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
