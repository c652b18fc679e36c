//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::tree::DeleteStrategy;

/// Binary search tree workbench: ordered inserts, strategy-based deletion, structural queries, and an interactive shell
#[derive(Parser, Debug)]
#[command(name = "rsbst")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive shell (the default when no command is given)
    Shell,

    /// Run a semicolon-separated command batch against a fresh tree
    Exec {
        /// Commands, e.g. "insert 5; insert 3; inorder"
        line: String,
    },

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
    /// Print effective settings as TOML
    Show,
    /// Print the global config file path
    Path,
}

/// One line of the interactive session, parsed in multicall mode so the
/// command word is the first token.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Insert a key at its ordered position
    #[command(allow_negative_numbers = true)]
    Insert { key: i64 },

    /// Attach a key as a new leaf directly under an existing parent
    #[command(allow_negative_numbers = true)]
    Attach { parent: i64, child: i64 },

    /// Check whether a key is present
    #[command(allow_negative_numbers = true)]
    Search { key: i64 },

    /// Delete a key; two-child nodes are refilled per the strategy
    #[command(allow_negative_numbers = true)]
    Delete {
        key: i64,
        /// Replacement strategy (defaults to the configured one)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Keys in preorder (node, left, right)
    Preorder,

    /// Keys in ascending order (left, node, right)
    Inorder,

    /// Keys in postorder (left, right, node)
    Postorder,

    /// Keys level by level, top to bottom
    Levels,

    /// Height in nodes along the longest path
    Height,

    /// Total number of nodes
    Nodes,

    /// Number of leaf nodes
    Leaves,

    /// Check whether the levels fill left to right without gaps
    Complete,

    /// Check whether every occupied level is perfectly doubled
    Full,

    /// Draw the tree
    Show,

    /// Drop every node
    Clear,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Strategy argument for clap, converted into the core type.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Predecessor,
    Successor,
}

impl From<StrategyArg> for DeleteStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Predecessor => DeleteStrategy::Predecessor,
            StrategyArg::Successor => DeleteStrategy::Successor,
        }
    }
}
