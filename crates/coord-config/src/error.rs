//! Error types for coord-config

/// Result type for coord-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in coord-config operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value would break the one-entry-per-line file format
    #[error("value for {key} cannot contain newline characters")]
    Newline { key: String },

    #[error("unknown configuration key: {name}")]
    UnknownKey { name: String },

    #[error(transparent)]
    Fs(#[from] coord_fs::Error),
}
