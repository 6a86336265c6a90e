// src/prompt.rs

//! Interactive prompt for the document name.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

pub const PROMPT: &str = "file name (without ending)?\n>>> ";

/// Print [`PROMPT`] to `output` and read one line from `input`.
///
/// Only the line terminator (`\n` or `\r\n`) is stripped. EOF before any
/// input is an error.
pub fn read_base_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .context("writing file name prompt")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("reading file name from stdin")?;
    if n == 0 {
        bail!("no file name given (stdin closed)");
    }

    let trimmed = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(trimmed.to_string())
}
