use serde::{Deserialize, Serialize};

use crate::appearance::ColorScheme;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "appshell_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses `<data dir>/logs`.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Where the general and secure key-value stores live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum StorageConfig {
    #[serde(rename = "file")]
    File(FileStorageConfig),
    /// Process-local maps; nothing survives a restart.
    #[serde(rename = "memory")]
    Memory,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File(FileStorageConfig::default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStorageConfig {
    /// Root directory. If empty or unset, uses `<data dir>/storage`.
    #[serde(default)]
    pub directory: Option<String>,
}

/// Source of OS light/dark appearance reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum AppearanceConfig {
    /// Constant report (or none), changed only through manual notification.
    #[serde(rename = "fixed")]
    Fixed(FixedAppearanceConfig),
    /// Derived once from the terminal's `COLORFGBG`.
    #[default]
    #[serde(rename = "env")]
    Env,
    /// Polls a file containing `light` or `dark`.
    #[serde(rename = "file")]
    File(FileAppearanceConfig),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedAppearanceConfig {
    #[serde(default)]
    pub scheme: Option<ColorScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAppearanceConfig {
    /// If empty or unset, uses `<data dir>/appearance`.
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    1_000
}

impl Default for FileAppearanceConfig {
    fn default() -> Self {
        Self {
            path: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
