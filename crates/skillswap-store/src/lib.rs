//! # skillswap-store
//!
//! Local directory store for SkillSwap: the current-session pointer, the user
//! list and the shared skill catalog, each kept as one JSON value in a
//! key-value area.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  DirectoryStore  (get / set / search)        │
//! ├──────────────────────────────────────────────┤
//! │  KeyValueStorage                             │
//! │    MemoryStorage  │ FileStorage │ Browser*   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every mutation reads the whole collection, modifies it and writes it back.
//! There is no locking: concurrent writers race and the last one wins.

pub mod catalog;
pub mod directory_store;
pub mod error;
pub mod id;
pub mod keys;
pub mod storage;
pub mod update_outcome;


pub use directory_store::DirectoryStore;
pub use error::{Result, StoreError};
pub use id::timestamp_id;
pub use storage::KeyValueStorage;
#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub use storage::browser_storage::BrowserStorage;
pub use storage::file_storage::FileStorage;
pub use storage::memory_storage::MemoryStorage;
pub use update_outcome::UpdateOutcome;
