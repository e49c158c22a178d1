use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "lockr")]
#[command(about = "Find secrets by partial key")]
#[command(version)]
pub struct Cli {
    /// JSON index of secret records (one key per line on stdin if omitted)
    #[arg(long, short = 'i', value_name = "PATH", global = true)]
    pub index: Option<PathBuf>,

    /// Config file (defaults to <config dir>/lockr/config.toml)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Match letter case exactly
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute; interactive pick when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a key interactively and print it
    Pick,
    /// List all keys, or rank them against a pattern
    List {
        /// Fuzzy pattern to rank keys against
        pattern: Option<String>,

        /// Maximum number of matches to print
        #[arg(long, short = 'l', value_name = "N")]
        limit: Option<usize>,
    },
    /// Suggest keys starting with a prefix
    Suggest {
        /// Key prefix
        prefix: String,

        /// Maximum number of suggestions
        #[arg(long, short = 'm', value_name = "N", default_value_t = 10)]
        max: usize,
    },
}
