//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Symbolic name of the screen shown on startup. Unknown names fall
    /// back to the home screen.
    #[serde(default = "default_start_screen")]
    pub start_screen: String,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_screen: default_start_screen(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            currency_symbol: default_currency_symbol(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Activity logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_start_screen() -> String {
    "home".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/recibo/logs".to_string()
}
