//! Command implementations for coord-cli
//!
//! Each function writes its output to the given writer so it can be tested
//! without spawning the binary.

pub mod config;
pub mod quote;

pub use config::{run_config_get, run_config_list, run_config_path, run_config_set};
pub use quote::{run_quote, run_split};
