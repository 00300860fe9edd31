//! Command-line parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use raybound_core::Format;

pub const USAGE: &str = "\
usage: raybound [table] [--format braces|cpp|rust] [--out <path>]
       raybound diff
       raybound help

table   print the sliding-distance table (default)
diff    compare two perft divide listings read from stdin";

/// Settings for the `table` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub format: Format,
    /// Write here instead of stdout.
    pub out: Option<PathBuf>,
}

/// A parsed invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Table(TableConfig),
    Diff,
    Help,
}

/// Parse the arguments that follow the program name.
pub fn parse_command(tokens: &[&str]) -> Result<Command> {
    match tokens.first() {
        None => Ok(Command::Table(TableConfig::default())),
        Some(&"help") | Some(&"-h") | Some(&"--help") => Ok(Command::Help),
        Some(flag) if flag.starts_with('-') => parse_table(tokens),
        Some(&"table") => parse_table(&tokens[1..]),
        Some(&"diff") => {
            if let Some(extra) = tokens.get(1) {
                bail!("unexpected argument to diff: {extra}");
            }
            Ok(Command::Diff)
        }
        Some(other) => bail!("unknown command: {other}\n\n{USAGE}"),
    }
}

/// Parse `table` flags. Later flags override earlier ones.
fn parse_table(tokens: &[&str]) -> Result<Command> {
    let mut config = TableConfig::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "--format" | "-f" => {
                let value = flag_value(tokens, i)?;
                config.format = value
                    .parse()
                    .with_context(|| format!("invalid value for {}", tokens[i]))?;
                i += 2;
            }
            "--out" | "-o" => {
                config.out = Some(PathBuf::from(flag_value(tokens, i)?));
                i += 2;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("unknown table option: {other}"),
        }
    }

    Ok(Command::Table(config))
}

fn flag_value<'a>(tokens: &[&'a str], i: usize) -> Result<&'a str> {
    match tokens.get(i + 1) {
        Some(&value) => Ok(value),
        None => bail!("missing value for {}", tokens[i]),
    }
}
