//! Type-safe durable key-value storage for the menu widget.
//!
//! Provides a small, ergonomic API over a string key-value slot store with
//! automatic JSON serialization. In the browser the backend is
//! `window.localStorage`; natively (and in tests) an in-memory map is used.
//!
//! # Example
//!
//! ```rust
//! use menu_store::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Item {
//!     name: String,
//!     qty: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("cart", &vec![Item { name: "Tea".into(), qty: 2 }]).unwrap();
//!
//! let items: Option<Vec<Item>> = cache.get("cart").unwrap();
//! assert_eq!(items.unwrap()[0].qty, 2);
//! ```

mod error;
mod kv;
mod memory;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use error::StoreError;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, KeyValueStore, MemoryStore, StoreError};
}
