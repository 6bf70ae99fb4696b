use std::path::{Path, PathBuf};

use super::types::{AppConfig, AppearanceConfig, FixedAppearanceConfig, StorageConfig};
use crate::appearance::ColorScheme;

/// Get the appshell data directory: `$APPSHELL_HOME` or `~/.appshell`
pub fn get_appshell_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(v) = std::env::var("APPSHELL_HOME") {
        if !v.trim().is_empty() {
            return Ok(PathBuf::from(v));
        }
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".appshell"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    load(None)
}

/// Load config from `explicit` if given, otherwise from the default locations.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    // Priority 1: <data dir>/config.toml (highest)
    let data_dir = get_appshell_data_dir()?;
    let home_config = data_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if let Some(path) = explicit {
        load_from_path(path)?
    } else if home_config.exists() {
        load_from_path(&home_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    apply_data_dir_defaults(&mut cfg, &data_dir);
    apply_env_overrides(&mut cfg, |name| std::env::var(name).ok())?;

    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
    Ok(cfg)
}

fn is_unset(v: &Option<String>) -> bool {
    v.as_deref().map(|s| s.trim().is_empty()).unwrap_or(true)
}

/// Fill unset directories and paths from the data directory.
pub(crate) fn apply_data_dir_defaults(cfg: &mut AppConfig, data_dir: &Path) {
    if is_unset(&cfg.logging.directory) {
        cfg.logging.directory = Some(data_dir.join("logs").to_string_lossy().to_string());
    }

    if let StorageConfig::File(ref mut file_cfg) = cfg.storage {
        if is_unset(&file_cfg.directory) {
            file_cfg.directory = Some(data_dir.join("storage").to_string_lossy().to_string());
        }
    }

    if let AppearanceConfig::File(ref mut file_cfg) = cfg.appearance {
        if is_unset(&file_cfg.path) {
            file_cfg.path = Some(data_dir.join("appearance").to_string_lossy().to_string());
        }
    }
}

/// Environment variable overrides (highest priority).
pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = var("APPSHELL_LOG_LEVEL") {
        cfg.logging.level = v;
    }

    if let Some(v) = var("APPSHELL_STORAGE_DIR") {
        if let StorageConfig::File(ref mut file_cfg) = cfg.storage {
            file_cfg.directory = Some(v);
        }
    }

    if let Some(v) = var("APPSHELL_COLOR_SCHEME") {
        let scheme = match v.trim() {
            "none" | "unset" => None,
            other => Some(
                other
                    .parse::<ColorScheme>()
                    .map_err(|e| anyhow::anyhow!("APPSHELL_COLOR_SCHEME: {e}"))?,
            ),
        };
        cfg.appearance = AppearanceConfig::Fixed(FixedAppearanceConfig { scheme });
    }

    Ok(())
}
