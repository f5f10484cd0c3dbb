//! Interactive confirmation gate

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// The only input that lets a destructive run proceed
pub const AFFIRMATIVE: &str = "yes";

/// Asks the user a yes/no question
pub trait Confirmation {
    /// Show `prompt` and return whether the user agreed
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Confirmation read as one line from a reader, prompting on a writer
pub struct LineConfirmation<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmation for LineConfirmation<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{} ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read confirmation")?;

        Ok(is_affirmative(&line))
    }
}

/// Exact, case-sensitive match on "yes" once the line terminator is removed
pub fn is_affirmative(line: &str) -> bool {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    line == AFFIRMATIVE
}
