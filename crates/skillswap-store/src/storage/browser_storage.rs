use crate::{KeyValueStorage, Result as StoreResult, StoreError};

/// `window.localStorage` for wasm32 builds.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Binds to the current window's local storage area.
    #[track_caller]
    pub fn local() -> StoreResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::backend("no global window object"))?;

        let storage = window
            .local_storage()
            .map_err(|e| StoreError::backend(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| StoreError::backend("localStorage is disabled"))?;

        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::backend(format!("getItem('{key}') failed: {e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::backend(format!("setItem('{key}') failed: {e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::backend(format!("removeItem('{key}') failed: {e:?}")))
    }
}
