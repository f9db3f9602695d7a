//! Configuration key identifiers.
//!
//! The on-disk name of each key is its variant name, so files stay readable
//! and stable across releases.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Keys whose values are written to the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersistedKey {
    /// Enables features tailored to the author's own workflow
    EnablePersonalFeatures,
    /// Python interpreter used for helper scripts
    FilepathPython,
    /// Directory that receives deleted files
    FilepathTrash,
    /// ExifTool executable
    FilepathExifTool,
    /// `cwebp.exe`; `dwebp.exe` is expected in the same directory
    FilepathWebp,
    /// mozjpeg `cjpeg.exe`
    FilepathMozJpeg,
}

impl PersistedKey {
    /// Every persisted key, in file order.
    pub const ALL: [PersistedKey; 6] = [
        Self::EnablePersonalFeatures,
        Self::FilepathPython,
        Self::FilepathTrash,
        Self::FilepathExifTool,
        Self::FilepathWebp,
        Self::FilepathMozJpeg,
    ];

    /// Get the identifier written to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnablePersonalFeatures => "EnablePersonalFeatures",
            Self::FilepathPython => "FilepathPython",
            Self::FilepathTrash => "FilepathTrash",
            Self::FilepathExifTool => "FilepathExifTool",
            Self::FilepathWebp => "FilepathWebp",
            Self::FilepathMozJpeg => "FilepathMozJpeg",
        }
    }
}

/// Keys whose values only live in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporaryKey {
    /// Skip interactive dialogs, e.g. while tests run
    SuppressDialogs,
}

impl TemporaryKey {
    pub const ALL: [TemporaryKey; 1] = [Self::SuppressDialogs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuppressDialogs => "SuppressDialogs",
        }
    }
}

impl FromStr for PersistedKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey { name: s.to_string() })
    }
}

impl FromStr for TemporaryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey { name: s.to_string() })
    }
}

impl AsRef<str> for PersistedKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TemporaryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersistedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TemporaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
