#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use appshell_core::api::{KeyValueStore, SecureStore, StorageError};
use async_trait::async_trait;
use tokio::sync::Notify;

/// In-memory key-value map with switchable failures.
#[derive(Default)]
pub struct FakeStore {
    values: Mutex<HashMap<String, String>>,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub fail_delete: AtomicBool,
    pub set_calls: AtomicUsize,
    /// When present, `get` waits for a permit first.
    gate: Option<Notify>,
    /// Writes of this value take 50ms before landing.
    slow_value: Mutex<Option<String>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.put(key, value);
        store
    }

    pub fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn slow_writes_of(&self, value: &str) {
        *self.slow_value.lock().unwrap() = Some(value.to_string());
    }

    pub fn fail_gets(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_sets(&self) {
        self.fail_set.store(true, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("get refused".into()));
        }
        Ok(self.value(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        let slow = self.slow_value.lock().unwrap().as_deref() == Some(value);
        if slow {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("set refused".into()));
        }
        self.put(key, value);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FakeStore {
    fn name(&self) -> &str {
        "fake"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write(key, value).await
    }
}

#[async_trait]
impl SecureStore for FakeStore {
    fn name(&self) -> &str {
        "fake-secure"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("delete refused".into()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Let spawned tasks on the current-thread test runtime run.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
