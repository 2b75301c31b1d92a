//! Key-value store adapters
//!
//! [`FileKeyValueStore`] persists to a JSON file in the user's data
//! directory; [`InMemoryKeyValueStore`] keeps nothing across runs.

mod file_store;
mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
