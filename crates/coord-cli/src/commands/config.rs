//! Config commands

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use coord_config::{ConfigStore, PersistedKey, TemporaryKey};
use serde_json::{Map, Value};

use crate::error::{CliError, Result};

fn open_store(path: &Path) -> Result<ConfigStore> {
    let mut store = ConfigStore::new(path);
    store.load_persisted()?;
    Ok(store)
}

/// Resolve a key name given on the command line.
///
/// In-memory keys get their own message since they exist but can never be
/// read from or saved to the file.
fn parse_key(name: &str) -> Result<PersistedKey> {
    if let Ok(key) = name.parse::<TemporaryKey>() {
        return Err(CliError::user(format!(
            "{key} is an in-memory setting and is not stored in the configuration file"
        )));
    }
    Ok(name.parse::<PersistedKey>()?)
}

/// Print the configuration file path.
pub fn run_config_path(out: &mut impl Write, path: &Path) -> Result<()> {
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Print the value of `key`.
pub fn run_config_get(out: &mut impl Write, path: &Path, key: &str) -> Result<()> {
    let key = parse_key(key)?;
    let store = open_store(path)?;
    writeln!(out, "{}", store.get(key))?;
    Ok(())
}

/// Set `key` to `value` and save.
pub fn run_config_set(out: &mut impl Write, path: &Path, key: &str, value: &str) -> Result<()> {
    let key = parse_key(key)?;
    let mut store = open_store(path)?;
    store.set(key, value)?;
    tracing::info!(%key, path = %path.display(), "setting saved");
    writeln!(out, "{} {}", "Saved".green().bold(), key)?;
    Ok(())
}

/// Print every persisted key with its current value.
pub fn run_config_list(out: &mut impl Write, path: &Path, json: bool) -> Result<()> {
    let store = open_store(path)?;

    if json {
        let map: Map<String, Value> = PersistedKey::ALL
            .into_iter()
            .map(|key| (key.to_string(), Value::String(store.get(key).to_string())))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&Value::Object(map))?)?;
        return Ok(());
    }

    for key in PersistedKey::ALL {
        writeln!(out, "{} = {}", key.as_str().cyan(), store.get(key))?;
    }
    for (name, value) in store.unrecognized() {
        writeln!(out, "{} = {} {}", name.dimmed(), value, "(unrecognized)".dimmed())?;
    }
    Ok(())
}
