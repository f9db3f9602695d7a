//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Coordinate Pictures helper - inspect settings and build tool command lines
#[derive(Parser, Debug)]
#[command(name = "coord")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "COORD_PICTURES_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Read or change persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the single command line that launches a tool with ARGS
    ///
    /// Examples:
    ///   coord quote convert "in file.png" -quality 90
    ///   coord quote -- -flag "C:\Program Files\"
    Quote {
        /// Arguments to combine, in order
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Split a command line into its arguments, one per output line
    Split {
        /// The command line to split
        line: String,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the path of the configuration file
    Path,

    /// Print the value of a setting (empty if unset)
    Get {
        /// Setting name, e.g. FilepathPython
        key: String,
    },

    /// Change a setting and save the file
    Set {
        /// Setting name, e.g. FilepathPython
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show every setting and its value
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
