use anyhow::Result;
use clap::{Parser, Subcommand};
use nsalias_core::Separator;
use std::path::PathBuf;

use crate::commands::{check_command, expand_command, list_command};

#[derive(Parser, Debug)]
#[command(name = "nsalias")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug         Enable debug logging\n    NSALIAS_CONFIG=<FILE>  Namespace file to use instead of discovery")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a namespaced module reference into a relative path
    #[command(visible_alias = "e")]
    Expand {
        /// Module reference, e.g. "<shared>/utils"
        reference: String,

        /// Path of the file containing the reference, relative to the project root
        #[arg(short, long = "from", default_value = ".")]
        from: String,

        /// Namespace file (defaults to discovery from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root used to relativize absolute caller paths
        #[arg(short, long)]
        root: Option<String>,

        /// Output separator: backslash or slash
        #[arg(short, long)]
        separator: Option<Separator>,
    },
    /// List the namespaces in the active namespace file
    #[command(visible_alias = "ls")]
    List {
        /// Namespace file (defaults to discovery from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the active namespace file
    Check {
        /// Namespace file (defaults to discovery from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Expand {
                reference,
                from,
                config,
                root,
                separator,
            } => expand_command(&reference, &from, config, root.as_deref(), separator),
            Commands::List { config, json } => list_command(config, json),
            Commands::Check { config } => check_command(config),
        }
    }
}
