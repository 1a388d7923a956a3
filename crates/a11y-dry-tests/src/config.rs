// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory stand-in for the browser's `localStorage`.

use a11y_core::config::{ConfigError, ConfigStore, PREFS_KEY};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can hand one clone to the widget and keep
/// another to inspect what was written.
///
/// # Example
///
/// ```
/// use a11y_core::{A11yWidget, ConfigService, WidgetOptions};
/// use a11y_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::with_prefs_json(r#"{"scaling":20}"#);
/// let widget = A11yWidget::new(WidgetOptions::default(), ConfigService::new(store.clone())).unwrap();
///
/// assert_eq!(widget.prefs().scaling, 20);
/// assert_eq!(store.load_count(), 1);
/// assert_eq!(store.save_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose preference key already holds `json`.
    pub fn with_prefs_json(json: &str) -> Self {
        let store = Self::new();
        store
            .lock()
            .data
            .insert(PREFS_KEY.to_owned(), json.as_bytes().to_vec());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make subsequent loads fail.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Make subsequent saves fail.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Raw bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }

    /// The preference blob as a UTF-8 string, if present.
    pub fn prefs_json(&self) -> Option<String> {
        self.raw(PREFS_KEY)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
