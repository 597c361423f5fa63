//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Editor setup wizard for language servers: pick your editor, get install instructions
#[derive(Parser, Debug)]
#[command(name = "lswizard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Decision tree TOML file (default: built-in editor catalog)
    #[arg(short = 'f', long, global = true, value_hint = ValueHint::FilePath)]
    pub tree_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the wizard interactively
    Wizard,

    /// Resolve a choice path and print the result
    Show {
        /// Choice labels from the root, in order
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Print the whole decision tree
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print a config file template
    Template,
}
