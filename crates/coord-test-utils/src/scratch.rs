//! Scratch directories for file-based tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
///
/// # Example
///
/// ```rust
/// use coord_test_utils::ScratchDir;
///
/// let scratch = ScratchDir::new();
/// let ini = scratch.file("test.ini");
/// std::fs::write(&ini, "FilepathPython=python").unwrap();
/// scratch.reset();
/// assert!(!ini.exists());
/// ```
pub struct ScratchDir {
    temp_dir: TempDir,
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchDir {
    /// Create an empty scratch directory.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let temp_dir = tempfile::Builder::new()
            .prefix("test_coordinate_pictures")
            .tempdir()
            .unwrap_or_else(|e| panic!("ScratchDir::new: failed to create temp dir: {e}"));
        Self { temp_dir }
    }

    /// Root of the scratch directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the scratch directory. Nothing is created.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Delete everything inside the scratch directory.
    ///
    /// # Panics
    /// Panics if the directory cannot be removed or recreated.
    pub fn reset(&self) {
        let root = self.path();
        fs::remove_dir_all(root)
            .unwrap_or_else(|e| panic!("ScratchDir::reset: failed to remove {}: {e}", root.display()));
        fs::create_dir_all(root)
            .unwrap_or_else(|e| panic!("ScratchDir::reset: failed to recreate {}: {e}", root.display()));
    }
}
