//! The `key=value` backing-file format.
//!
//! One entry per line, split on the first `=`. Keys and values are taken
//! verbatim: no trimming, no quoting, no escapes. Values therefore may hold
//! `=` and tabs but never line breaks.

use std::collections::BTreeMap;

use crate::PersistedKey;

/// Contents of a backing file after parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// Entries for known keys.
    pub values: BTreeMap<PersistedKey, String>,
    /// Entries for keys this build does not know, in file order.
    pub unrecognized: Vec<(String, String)>,
    /// Number of non-blank lines that could not be parsed.
    pub skipped_lines: usize,
}

/// Parse backing-file content.
///
/// Never fails: lines without `=` or with an empty key are skipped and
/// counted, blank lines are ignored, and a repeated key keeps its last
/// value.
pub fn parse(content: &str) -> ParsedFile {
    parse_bytes(content.as_bytes())
}

/// Parse raw backing-file bytes.
///
/// Decoding happens per line, so a line that is not valid UTF-8 is skipped
/// and counted like any other malformed line instead of discarding the
/// whole file.
pub fn parse_bytes(content: &[u8]) -> ParsedFile {
    let mut parsed = ParsedFile::default();

    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let Ok(line) = std::str::from_utf8(raw) else {
            tracing::debug!(line = index + 1, "skipping configuration line that is not UTF-8");
            parsed.skipped_lines += 1;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some((name, value)) = line.split_once('=').filter(|(name, _)| !name.is_empty()) else {
            tracing::debug!(line = index + 1, "skipping malformed configuration line");
            parsed.skipped_lines += 1;
            continue;
        };

        match name.parse::<PersistedKey>() {
            Ok(key) => {
                parsed.values.insert(key, value.to_string());
            }
            Err(_) => {
                tracing::debug!(key = name, "preserving unrecognized configuration key");
                match parsed.unrecognized.iter_mut().find(|(n, _)| n == name) {
                    Some(entry) => entry.1 = value.to_string(),
                    None => parsed
                        .unrecognized
                        .push((name.to_string(), value.to_string())),
                }
            }
        }
    }

    parsed
}

/// Render entries back to file content.
///
/// Known keys come first in declaration order, then unrecognized entries in
/// the order they were loaded. Every line ends with `\n`.
pub fn render(values: &BTreeMap<PersistedKey, String>, unrecognized: &[(String, String)]) -> String {
    let mut out = String::new();
    let known = values.iter().map(|(key, value)| (key.as_str(), value.as_str()));
    let unknown = unrecognized
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()));

    for (name, value) in known.chain(unknown) {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
