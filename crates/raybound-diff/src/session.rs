//! Interactive two-block comparison over a line-oriented reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::diff::{MoveSet, Report, diff};
use crate::error::DiffError;

pub const PREDICTED_PROMPT: &str = "Enter predicted moves: ";
pub const CORRECT_PROMPT: &str = "Enter correct moves: ";

/// Read lines until an empty line or end of input.
///
/// Only the line terminator is stripped. A line of spaces is kept (and later
/// dropped as malformed) without ending the block.
pub fn read_block<R: BufRead>(input: &mut R) -> Result<Vec<String>, DiffError> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Prompt for a block, read it and parse it.
fn prompt_block<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<MoveSet, DiffError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let lines = read_block(input)?;
    let set = MoveSet::from_lines(&lines);
    info!(
        lines = lines.len(),
        moves = set.len(),
        nodes = set.total_nodes(),
        "read divide listing"
    );
    debug!(
        entries = ?set.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "parsed divide entries"
    );
    Ok(set)
}

/// Run one comparison: predicted block, then correct block, then the report.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<Report, DiffError> {
    let predicted = prompt_block(&mut input, output, PREDICTED_PROMPT)?;
    let correct = prompt_block(&mut input, output, CORRECT_PROMPT)?;

    let report = diff(&predicted, &correct);
    write!(output, "{report}")?;
    output.flush()?;
    Ok(report)
}
