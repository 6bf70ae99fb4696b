//! Secure store backed by one owner-only file per key.
//!
//! Values are base64-encoded; on unix the directory is `0700` and files are `0600`.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

use appshell_core::api::{SecureStore, StorageError};

const DIR_NAME: &str = "secure";

pub struct FileSecureStore {
    dir: PathBuf,
}

impl FileSecureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_dir(root: &Path) -> Self {
        Self::new(root.join(DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::Backend(format!("invalid secure key: {key:?}")));
        }
        Ok(self.dir.join(key))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        restrict(&self.dir, 0o700).await
    }
}

#[cfg(unix)]
async fn restrict(path: &Path, mode: u32) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict(_path: &Path, _mode: u32) -> Result<(), StorageError> {
    Ok(())
}

#[async_trait]
impl SecureStore for FileSecureStore {
    fn name(&self) -> &str {
        "file-secure"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let bytes = STANDARD
            .decode(raw.trim())
            .map_err(|e| StorageError::Backend(format!("corrupt secure value: {e}")))?;
        let value = String::from_utf8(bytes)
            .map_err(|e| StorageError::Backend(format!("corrupt secure value: {e}")))?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        self.ensure_dir().await?;

        let tmp = self.dir.join(format!(".{key}.tmp"));
        tokio::fs::write(&tmp, STANDARD.encode(value.as_bytes())).await?;
        restrict(&tmp, 0o600).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(
            target: "appshell.storage",
            stage = "storage.secure.set",
            key = key
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tracing::debug!(
            target: "appshell.storage",
            stage = "storage.secure.delete",
            key = key
        );
        Ok(())
    }
}
