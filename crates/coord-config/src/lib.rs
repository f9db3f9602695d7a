//! Configuration store for Coordinate Pictures
//!
//! Settings live in two namespaces:
//!
//! - **Persisted** ([`PersistedKey`]): written to a `key=value` text file
//!   on every change and read back with [`ConfigStore::load_persisted`].
//! - **Temporary** ([`TemporaryKey`]): held in memory for the lifetime of
//!   the store, never written to disk.
//!
//! The two key families are distinct types, so a key can only be read or
//! written through its own namespace's accessors.
//!
//! A process-wide instance is available through [`current`].

pub mod current;
pub mod error;
pub mod format;
pub mod keys;
pub mod store;

pub use current::{current, default_config_path, replace_current, CONFIG_PATH_ENV};
pub use error::{Error, Result};
pub use keys::{PersistedKey, TemporaryKey};
pub use store::ConfigStore;
