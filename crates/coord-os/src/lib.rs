//! Process command-line helpers for Coordinate Pictures
//!
//! External tools (image converters, audio players, diff viewers) are
//! launched with a single command-line string. This crate builds that
//! string so the conventional Windows tokenizer splits it back into exactly
//! the original arguments, and provides that tokenizer for verification.

pub mod args;
pub mod split;

pub use args::{combine_process_arguments, needs_quoting, quote_argument};
pub use split::split_command_line;
