// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `window.localStorage`-backed [`ConfigStore`].

use a11y_core::config::{ConfigError, ConfigStore};
use web_sys::{Storage, Window};

/// Stores config blobs as strings in the page's `localStorage`.
///
/// When storage is unavailable (privacy mode, sandboxed iframe) every load
/// and save fails, which the settings layer turns into defaults.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Bind to the window's `localStorage`, if it can be reached.
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage, ConfigError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ConfigError::Other("localStorage unavailable".into()))
    }
}

impl ConfigStore for LocalStorageStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self.storage()?.get_item(key) {
            Ok(Some(value)) => Ok(value.into_bytes()),
            Ok(None) => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Other(format!("getItem failed: {err:?}"))),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let value = std::str::from_utf8(data)
            .map_err(|err| ConfigError::Other(format!("non-utf8 blob: {err}")))?;
        self.storage()?
            .set_item(key, value)
            .map_err(|err| ConfigError::Other(format!("setItem failed: {err:?}")))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use a11y_core::{ConfigService, PreferenceRecord, SettingsStore, PREFS_KEY};
    use wasm_bindgen_test::*;

    const KEY: &str = "a11y_storage_test";

    fn store() -> LocalStorageStore {
        let store = LocalStorageStore::from_window(&web_sys::window().unwrap());
        store.storage().unwrap().remove_item(KEY).unwrap();
        store
    }

    #[wasm_bindgen_test]
    fn missing_key_is_not_found() {
        assert!(matches!(store().load_raw(KEY), Err(ConfigError::NotFound)));
    }

    #[wasm_bindgen_test]
    fn saved_blob_is_stored_as_text() {
        let store = store();
        store.save_raw(KEY, br#"{"scaling":10}"#).unwrap();

        assert_eq!(store.load_raw(KEY).unwrap(), br#"{"scaling":10}"#);
        assert_eq!(
            store.storage().unwrap().get_item(KEY).unwrap().as_deref(),
            Some(r#"{"scaling":10}"#)
        );
        store.storage().unwrap().remove_item(KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn non_utf8_blob_is_rejected() {
        assert!(matches!(
            store().save_raw(KEY, &[0xff, 0xfe]),
            Err(ConfigError::Other(_))
        ));
    }

    #[wasm_bindgen_test]
    fn unavailable_storage_loads_defaults() {
        let service = ConfigService::new(LocalStorageStore { storage: None });
        assert!(matches!(
            service.store().load_raw(PREFS_KEY),
            Err(ConfigError::Other(_))
        ));
        assert_eq!(service.load_prefs(), PreferenceRecord::default());
        service.save_prefs(&PreferenceRecord::default());
    }

    #[wasm_bindgen_test]
    fn preferences_survive_a_reload() {
        let window = web_sys::window().unwrap();
        let prefs = PreferenceRecord {
            scaling: 30,
            readable_font: true,
            font_scaling: -10,
        };
        ConfigService::new(LocalStorageStore::from_window(&window)).save_prefs(&prefs);

        let reloaded = ConfigService::new(LocalStorageStore::from_window(&window));
        assert_eq!(reloaded.load_prefs(), prefs);
        reloaded.store().storage().unwrap().remove_item(PREFS_KEY).unwrap();
    }
}
