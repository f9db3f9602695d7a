//! Process-wide configuration instance.

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::ConfigStore;

/// Environment variable overriding the default backing-file path.
pub const CONFIG_PATH_ENV: &str = "COORD_PICTURES_CONFIG";

const APP_DIR: &str = "coordinate-pictures";
const FILE_NAME: &str = "options.ini";

static CURRENT: LazyLock<Mutex<ConfigStore>> = LazyLock::new(|| Mutex::new(open_default()));

/// Default location of the backing file.
///
/// `$COORD_PICTURES_CONFIG` if set, otherwise
/// `<config dir>/coordinate-pictures/options.ini`, otherwise `options.ini`
/// in the working directory.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR).join(FILE_NAME),
        None => PathBuf::from(FILE_NAME),
    }
}

fn open_default() -> ConfigStore {
    let mut store = ConfigStore::new(default_config_path());
    if let Err(e) = store.load_persisted() {
        tracing::warn!(
            path = %store.path().display(),
            error = %e,
            "could not load configuration, continuing with defaults"
        );
    }
    store
}

/// Lock the shared store, creating and loading it on first use.
///
/// Hold the guard only for the duration of a read or write.
pub fn current() -> MutexGuard<'static, ConfigStore> {
    // `set` commits to memory last, so a panic never leaves a torn store
    CURRENT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Swap the shared store for `store`, returning the previous instance.
///
/// Intended for tests and for re-pointing the application at another file.
pub fn replace_current(store: ConfigStore) -> ConfigStore {
    std::mem::replace(&mut *current(), store)
}
