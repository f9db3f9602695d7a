//! Filesystem abstraction for Coordinate Pictures
//!
//! Provides the small set of I/O operations the configuration store relies
//! on: tolerant reads and atomic, lock-protected writes.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::RobustnessConfig;
