//! # Console
//!
//! Line-oriented prompt/response over any reader and writer.
//!
//! The binary wires this to locked stdin/stdout; tests drive it with a
//! `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

/// Prompts on `output`, reads answers from `input`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `prompt` and returns the trimmed answer.
    ///
    /// End of input is [`AppError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
