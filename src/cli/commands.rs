//! Command dispatch for the outer CLI and the interactive shell

use std::io::{self, BufRead};

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, ShellCommand, ShellLine};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::errors::TreeResult;
use crate::tree::{DeleteStrategy, Tree};

/// Outcome of one dispatched shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Data to print as-is
    Report(String),
    /// Confirmation of a mutation
    Done(String),
    /// Leave the session
    Quit,
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Shell) => run_shell(),
        Some(Commands::Exec { line }) => run_batch(line),
        Some(Commands::Config { command }) => run_config(command),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
    }
}

fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory on this platform"),
        },
    }
    Ok(())
}

/// Interactive loop: one command per line, errors are reported and the loop
/// keeps going, like the menu it replaces.
#[instrument(level = "debug", skip_all)]
fn run_shell() -> CliResult<()> {
    let settings = Settings::load()?;
    let mut tree = Tree::new();
    output::header("rsbst interactive shell ('help' lists commands, 'quit' leaves)");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        output::prompt(&settings.prompt);
        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CliError::io("read command line", e))?;
        if read == 0 {
            break;
        }
        if run_line(&mut tree, &settings, &line)? {
            break;
        }
    }
    Ok(())
}

/// Parses and dispatches one shell line, printing the outcome. Returns true
/// when the session should end. Parse failures and tree errors are printed
/// and the session stays alive.
pub fn run_line(tree: &mut Tree<i64>, settings: &Settings, line: &str) -> CliResult<bool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(false);
    }
    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            // clap renders its own usage and help text
            err.print().map_err(|e| CliError::io("print usage", e))?;
            return Ok(false);
        }
    };
    match dispatch(tree, settings, &parsed.command) {
        Ok(Outcome::Report(text)) => output::info(&text),
        Ok(Outcome::Done(text)) => output::success(&text),
        Ok(Outcome::Quit) => return Ok(true),
        Err(e) => output::error(&e),
    }
    Ok(false)
}

/// Runs a semicolon-separated batch against a fresh tree. Strict, unlike the
/// interactive loop: the first tree error aborts so scripts fail loudly.
#[instrument(level = "debug", skip_all)]
fn run_batch(line: &str) -> CliResult<()> {
    let settings = Settings::load()?;
    let mut tree = Tree::new();
    for part in line.split(';') {
        let tokens: Vec<&str> = part.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let parsed =
            ShellLine::try_parse_from(tokens).map_err(|e| CliError::InvalidArgs(e.to_string()))?;
        match dispatch(&mut tree, &settings, &parsed.command)? {
            Outcome::Report(text) => output::info(&text),
            Outcome::Done(text) => output::success(&text),
            Outcome::Quit => break,
        }
    }
    Ok(())
}

/// Applies one shell command to the tree. Pure with respect to the terminal:
/// the caller decides how to print the outcome.
#[instrument(level = "debug", skip(tree, settings))]
pub fn dispatch(
    tree: &mut Tree<i64>,
    settings: &Settings,
    command: &ShellCommand,
) -> TreeResult<Outcome, i64> {
    let outcome = match command {
        ShellCommand::Insert { key } => {
            tree.insert(*key)?;
            debug!(key, "inserted");
            Outcome::Done(format!("inserted {key}"))
        }
        ShellCommand::Attach { parent, child } => {
            tree.insert_child(parent, *child)?;
            debug!(parent, child, "attached");
            Outcome::Done(format!("attached {child} under {parent}"))
        }
        ShellCommand::Search { key } => {
            if tree.contains(key) {
                Outcome::Report(format!("{key} found"))
            } else {
                Outcome::Report(format!("{key} not found"))
            }
        }
        ShellCommand::Delete { key, strategy } => {
            let strategy = strategy
                .map(DeleteStrategy::from)
                .unwrap_or(settings.default_strategy);
            tree.delete(key, strategy)?;
            debug!(key, ?strategy, "deleted");
            Outcome::Done(format!("deleted {key}"))
        }
        ShellCommand::Preorder => Outcome::Report(join_keys(tree.preorder())),
        ShellCommand::Inorder => Outcome::Report(join_keys(tree.inorder())),
        ShellCommand::Postorder => Outcome::Report(join_keys(tree.postorder())),
        ShellCommand::Levels => Outcome::Report(join_keys(tree.level_order())),
        ShellCommand::Height => Outcome::Report(format!("height: {}", tree.height())),
        ShellCommand::Nodes => Outcome::Report(format!("nodes: {}", tree.node_count())),
        ShellCommand::Leaves => Outcome::Report(format!("leaves: {}", tree.leaf_count())),
        ShellCommand::Complete => {
            Outcome::Report(verdict(tree.is_complete(), "complete", "not complete"))
        }
        ShellCommand::Full => Outcome::Report(verdict(tree.is_full(), "full", "not full")),
        ShellCommand::Show => Outcome::Report(tree.render().to_string().trim_end().to_string()),
        ShellCommand::Clear => {
            tree.clear();
            Outcome::Done("tree cleared".to_string())
        }
        ShellCommand::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a i64>) -> String {
    let joined = keys.map(|key| key.to_string()).join(" ");
    if joined.is_empty() {
        "(empty)".to_string()
    } else {
        joined
    }
}

fn verdict(flag: bool, yes: &str, no: &str) -> String {
    if flag {
        yes.to_string()
    } else {
        no.to_string()
    }
}
