#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub mod browser_storage;
pub mod file_storage;
pub mod memory_storage;

use crate::Result as StoreResult;

/// A durable string key-value area.
///
/// Mirrors the browser `Storage` interface: absent keys read as `None` and
/// removing an absent key is not an error.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;

    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}
