//! Shared test utilities for the coordinate-pictures workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`assert`] — equality and error-message assertions
//! - [`scratch`] — [`ScratchDir`] for file-based tests

pub mod assert;
pub mod scratch;

pub use assert::{assert_equal, assert_error_contains, render_error_chain};
pub use scratch::ScratchDir;
