//! Read-only access to the persisted credential token
//!
//! The browser build reads `window.localStorage`; the desktop build keeps one
//! file per key under the app's local data directory.

use crate::shared::errors::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait(?Send)]
pub trait CredentialStore {
    /// Raw value under `key`, or `None` when nothing usable is stored
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Blank values count as absent, like an empty string in a truthiness check
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// In-memory store for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    values: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

#[async_trait(?Send)]
impl CredentialStore for MemoryCredentialStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(non_blank(self.values.get(key).cloned()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub type PlatformCredentialStore = LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::*;

    /// `window.localStorage` backed store
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorageStore;

    #[async_trait(?Send)]
    impl CredentialStore for LocalStorageStore {
        async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;

            let value = storage
                .get_item(key)
                .map_err(|e| StorageError::ReadError(format!("{:?}", e)))?;
            Ok(non_blank(value))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileCredentialStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformCredentialStore = FileCredentialStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::*;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    const APP_DIR_NAME: &str = "past-searches";

    /// One file per key, holding the raw token
    #[derive(Debug, Clone)]
    pub struct FileCredentialStore {
        dir: PathBuf,
    }

    impl FileCredentialStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if !valid {
                return Err(StorageError::ReadError(format!("invalid key: {}", key)));
            }
            Ok(self.dir.join(key))
        }
    }

    impl Default for FileCredentialStore {
        fn default() -> Self {
            let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
            Self::new(base.join(APP_DIR_NAME))
        }
    }

    #[async_trait(?Send)]
    impl CredentialStore for FileCredentialStore {
        async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            let path = self.key_path(key)?;
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => Ok(non_blank(Some(contents.trim().to_string()))),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::ReadError(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))),
            }
        }
    }
}
