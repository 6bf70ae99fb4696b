use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use appshell_core::api::{
    AppConfig, AppearanceConfig, AppearanceSource, KeyValueStore, SecureStore, StorageConfig,
};

use crate::appearance::{EnvAppearance, FileAppearance, FixedAppearance};
use crate::storage::{FileKeyValueStore, FileSecureStore, MemoryKeyValueStore, MemorySecureStore};

pub fn build_storage(cfg: &AppConfig) -> Result<(Arc<dyn KeyValueStore>, Arc<dyn SecureStore>)> {
    match &cfg.storage {
        StorageConfig::File(file_cfg) => {
            let dir = file_cfg
                .directory
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .context("storage directory not configured")?;
            let general: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::in_dir(&dir));
            let secure: Arc<dyn SecureStore> = Arc::new(FileSecureStore::in_dir(&dir));
            Ok((general, secure))
        }
        StorageConfig::Memory => {
            let general: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
            let secure: Arc<dyn SecureStore> = Arc::new(MemorySecureStore::new());
            Ok((general, secure))
        }
    }
}

/// File polling spawns a task, so this must run inside a tokio runtime.
pub fn build_appearance(cfg: &AppConfig) -> Result<Arc<dyn AppearanceSource>> {
    match &cfg.appearance {
        AppearanceConfig::Fixed(fixed_cfg) => Ok(Arc::new(FixedAppearance::new(fixed_cfg.scheme))),
        AppearanceConfig::Env => Ok(Arc::new(EnvAppearance::from_env())),
        AppearanceConfig::File(file_cfg) => {
            let path = file_cfg
                .path
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .context("appearance file path not configured")?;
            let interval = Duration::from_millis(file_cfg.poll_interval_ms.max(1));
            let source: Arc<dyn AppearanceSource> = FileAppearance::start(path, interval);
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appshell_core::api::{FileAppearanceConfig, FileStorageConfig, FixedAppearanceConfig};

    #[test]
    fn test_file_storage_requires_directory() {
        let cfg = AppConfig {
            storage: StorageConfig::File(FileStorageConfig { directory: None }),
            ..AppConfig::default()
        };
        assert!(build_storage(&cfg).is_err());
    }

    #[test]
    fn test_backend_selection() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig {
            storage: StorageConfig::File(FileStorageConfig {
                directory: Some(dir.path().to_string_lossy().to_string()),
            }),
            appearance: AppearanceConfig::Fixed(FixedAppearanceConfig { scheme: None }),
            ..AppConfig::default()
        };
        let (general, secure) = build_storage(&cfg).unwrap();
        assert_eq!(general.name(), "file");
        assert_eq!(secure.name(), "file-secure");
        assert_eq!(build_appearance(&cfg).unwrap().name(), "fixed");

        let cfg = AppConfig {
            storage: StorageConfig::Memory,
            ..AppConfig::default()
        };
        let (general, secure) = build_storage(&cfg).unwrap();
        assert_eq!(general.name(), "memory");
        assert_eq!(secure.name(), "memory-secure");
    }

    #[tokio::test]
    async fn test_file_appearance_requires_path() {
        let cfg = AppConfig {
            appearance: AppearanceConfig::File(FileAppearanceConfig {
                path: None,
                poll_interval_ms: 100,
            }),
            ..AppConfig::default()
        };
        assert!(build_appearance(&cfg).is_err());
    }
}
