//! Local persisted state - JSON file storage
//!
//! Two small key-value-shaped stores: the logged-in session (token +
//! account) and the open cart's line items. Both are instances of the same
//! JSON-file store under an app-chosen base directory.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::models::{Account, CartItem};

/// Logged-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub account: Account,
    /// Token expiry (Unix seconds), if the server issues expiring tokens
    pub expires_at: Option<u64>,
}

impl Session {
    pub fn new(token: String, account: Account, expires_at: Option<u64>) -> Self {
        Self {
            token,
            account,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

/// One JSON value persisted at `base_path/filename`
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> JsonFileStore<T> {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self {
            path,
            _payload: PhantomData,
        }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save the value, creating the base directory if needed
    pub fn save(&self, value: &T) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json)
    }

    /// Load the value, if a readable file exists
    pub fn load(&self) -> Option<T> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the file
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Session storage
pub type SessionStorage = JsonFileStore<Session>;

/// Cart contents storage
pub type CartStorage = JsonFileStore<Vec<CartItem>>;
