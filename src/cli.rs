//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **query**: Fuzzy-find a case and print its directory (default)
//! - **init**: Create a new case
//! - **import**: Pick cases from a Salesforce CSV export and create them
//! - **shell**: Print the `jk` shell function
//! - **config**: Print the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kase")]
#[command(about = "Keep track of support cases", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pop up a fuzzy finder to select a case to cd into
    ///
    /// For the cd to work, the shell integration from `kase shell` must be
    /// loaded.
    #[command(visible_alias = "q")]
    Query {
        /// Case directory (overrides KASE_DIR and the config file)
        #[arg(value_name = "CASE_DIR")]
        case_dir: Option<String>,

        /// Initial filter text
        #[arg(short = 'p', long = "prompt", default_value = "")]
        prompt: String,
    },

    /// Create a new case.json in its own directory
    ///
    /// Missing values are prompted for.
    Init {
        #[arg(value_name = "CASE_DIR")]
        case_dir: Option<String>,

        /// Case name, e.g. "[01234567] Example case title"
        #[arg(short = 'n', long = "name")]
        name: Option<String>,

        /// Launchpad bug reference
        #[arg(short = 'l', long = "lp")]
        lp: Option<String>,

        #[arg(short = 'd', long = "description")]
        description: Option<String>,
    },

    /// Select cases from a Salesforce CSV export and create them
    Import {
        /// CSV export of a Salesforce case report
        #[arg(value_name = "CSV")]
        csv: PathBuf,

        #[arg(value_name = "CASE_DIR")]
        case_dir: Option<String>,

        /// Initial filter text
        #[arg(short = 'p', long = "prompt", default_value = "")]
        prompt: String,
    },

    /// Print the shell integration code
    ///
    /// Source it from your shell configuration to get `jk`.
    Shell,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Query if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Query {
            case_dir: None,
            prompt: String::new(),
        })
    }
}
