// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port and settings service for the widget's persisted preferences.
//!
//! Layering, bottom up:
//!
//! - [`ConfigStore`] moves raw bytes under a logical key (browser
//!   `localStorage`, an in-memory fake, ...).
//! - [`ConfigService`] serializes values as JSON through a store.
//! - [`SettingsStore`] is the record-level port the widget depends on. It is
//!   total: reads fall back to defaults and writes are best-effort.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::prefs::PreferenceRecord;

/// Fixed storage key holding the serialized [`PreferenceRecord`].
pub const PREFS_KEY: &str = "a11y_data";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob, replacing any prior value.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Backend failure (storage disabled, quota exceeded, ...).
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize (compact JSON) and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec(value)?;
        self.store.save_raw(key, &data)
    }
}

/// Record-level persistence port used by the widget.
pub trait SettingsStore {
    /// Read the persisted record. Missing or malformed data yields defaults.
    fn load_prefs(&self) -> PreferenceRecord;
    /// Persist the full record, overwriting the prior value (best-effort).
    fn save_prefs(&self, prefs: &PreferenceRecord);
}

impl<S> SettingsStore for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> PreferenceRecord {
        match self.load::<PreferenceRecord>(PREFS_KEY) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => PreferenceRecord::default(),
            Err(err) => {
                warn!(key = PREFS_KEY, error = %err, "unreadable preferences, using defaults");
                PreferenceRecord::default()
            }
        }
    }

    fn save_prefs(&self, prefs: &PreferenceRecord) {
        if let Err(err) = self.save(PREFS_KEY, prefs) {
            warn!(key = PREFS_KEY, error = %err, "failed to persist preferences");
        }
    }
}
