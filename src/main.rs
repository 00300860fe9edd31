mod command;

use std::io::{self, Write};
use std::{env, fs};

use anyhow::{Context, Result};
use tracing::info;

use raybound_core::{MAX_SLIDING_DISTANCE, render};

use crate::command::{Command, TableConfig, USAGE, parse_command};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the table or the diff report.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let tokens: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = parse_command(&tokens)?;
    info!(?command, "raybound starting");

    match command {
        Command::Table(config) => write_table(&config, &mut io::stdout().lock()),
        Command::Diff => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            let report = raybound_diff::run(stdin.lock(), &mut stdout)?;
            info!(
                extra = report.extra.len(),
                missing = report.missing.len(),
                "diff finished"
            );
            Ok(())
        }
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

/// Rendered table followed by a newline, exactly as it is emitted.
fn table_text(config: &TableConfig) -> String {
    let mut text = render(&MAX_SLIDING_DISTANCE, config.format);
    text.push('\n');
    text
}

/// Write the table to `config.out`, or to `stdout` when no path is set.
fn write_table<W: Write>(config: &TableConfig, stdout: &mut W) -> Result<()> {
    let text = table_text(config);
    match &config.out {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %config.format, "table written");
        }
        None => {
            stdout
                .write_all(text.as_bytes())
                .context("failed to write table to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}
