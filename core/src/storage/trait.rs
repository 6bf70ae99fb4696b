use async_trait::async_trait;

use crate::error::StorageError;

/// Non-secure persistent store for small UI preferences.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    fn name(&self) -> &str;
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Persistent store with platform-level confidentiality for secrets.
///
/// Deleting a key that holds no value is not an error.
#[async_trait]
pub trait SecureStore: Send + Sync {
    fn name(&self) -> &str;
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
