//! The two-namespace configuration store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use coord_fs::{RobustnessConfig, io};

use crate::format::{self, ParsedFile};
use crate::{Error, PersistedKey, Result, TemporaryKey};

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Key/value configuration bound to a backing file.
///
/// Persisted values are loaded with [`load_persisted`](Self::load_persisted)
/// and the whole file is rewritten on every successful
/// [`set`](Self::set). Reads never touch the disk. Temporary values are
/// kept in memory only.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    persisted: BTreeMap<PersistedKey, String>,
    unrecognized: Vec<(String, String)>,
    temporary: BTreeMap<TemporaryKey, String>,
    robustness: RobustnessConfig,
}

impl ConfigStore {
    /// Create an empty store bound to `path`. Nothing is read until
    /// [`load_persisted`](Self::load_persisted) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_robustness(path, RobustnessConfig::default())
    }

    /// Create an empty store with custom write settings.
    pub fn with_robustness(path: impl Into<PathBuf>, robustness: RobustnessConfig) -> Self {
        Self {
            path: path.into(),
            persisted: BTreeMap::new(),
            unrecognized: Vec::new(),
            temporary: BTreeMap::new(),
            robustness,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace persisted state with the contents of the backing file.
    ///
    /// A missing file yields an empty store. Malformed lines, including lines
    /// that are not UTF-8, are skipped so a damaged file never blocks
    /// startup; entries for unknown keys are kept and written back on the
    /// next save.
    pub fn load_persisted(&mut self) -> Result<()> {
        let ParsedFile {
            values,
            unrecognized,
            skipped_lines,
        } = match io::read_bytes_if_exists(&self.path)? {
            Some(content) => format::parse_bytes(&content),
            None => {
                tracing::debug!(path = %self.path.display(), "no configuration file, starting empty");
                ParsedFile::default()
            }
        };

        if skipped_lines > 0 {
            tracing::warn!(
                path = %self.path.display(),
                skipped = skipped_lines,
                "ignored malformed lines in configuration file"
            );
        }
        tracing::debug!(
            path = %self.path.display(),
            entries = values.len(),
            unrecognized = unrecognized.len(),
            "loaded configuration"
        );

        self.persisted = values;
        self.unrecognized = unrecognized;
        Ok(())
    }

    /// Current value of a persisted key, or `""` if it was never set.
    pub fn get(&self, key: PersistedKey) -> &str {
        self.persisted.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Set a persisted key and rewrite the backing file.
    ///
    /// Fails without changing anything if `value` contains `\r` or `\n`, or
    /// if the file cannot be written.
    pub fn set(&mut self, key: PersistedKey, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate(key.as_str(), &value)?;

        let mut next = self.persisted.clone();
        next.insert(key, value);
        let content = format::render(&next, &self.unrecognized);
        io::write_atomic(&self.path, content.as_bytes(), self.robustness)?;

        tracing::debug!(path = %self.path.display(), %key, "saved configuration");
        self.persisted = next;
        Ok(())
    }

    /// Boolean view of a persisted key; unset reads as `false`.
    pub fn get_bool(&self, key: PersistedKey) -> bool {
        self.get(key) == TRUE
    }

    pub fn set_bool(&mut self, key: PersistedKey, value: bool) -> Result<()> {
        self.set(key, bool_str(value))
    }

    /// Current value of a temporary key, or `""` if it was never set.
    pub fn get_temporary(&self, key: TemporaryKey) -> &str {
        self.temporary.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Set a temporary key. Never touches the backing file.
    pub fn set_temporary(&mut self, key: TemporaryKey, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate(key.as_str(), &value)?;
        self.temporary.insert(key, value);
        Ok(())
    }

    pub fn get_temporary_bool(&self, key: TemporaryKey) -> bool {
        self.get_temporary(key) == TRUE
    }

    pub fn set_temporary_bool(&mut self, key: TemporaryKey, value: bool) -> Result<()> {
        self.set_temporary(key, bool_str(value))
    }

    /// Persisted entries that have been set, in file order.
    pub fn entries(&self) -> impl Iterator<Item = (PersistedKey, &str)> {
        self.persisted.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Entries for keys this build does not recognize, as loaded from disk.
    pub fn unrecognized(&self) -> &[(String, String)] {
        &self.unrecognized
    }
}

fn validate(key: &str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) {
        return Err(Error::Newline {
            key: key.to_string(),
        });
    }
    Ok(())
}

fn bool_str(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}
