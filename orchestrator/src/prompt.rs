//! Interactive selection of the training mode.

use std::io::{self, BufRead, Write};

use log::warn;
use machine_learning::training::Mode;

pub const PROMPT: &str = "Enter 1 for naive perceptron or 2 for pocket perceptron: ";

/// Asks for a training mode until a valid one is entered.
///
/// # Arguments
/// * `input` - Where the answers are read from, one per line.
/// * `output` - Where the prompt is written to.
///
/// # Errors
/// Returns `io::ErrorKind::UnexpectedEof` if the input ends before a valid answer.
pub fn select_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Mode> {
    let mut line = String::new();

    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "the input ended before a training mode was selected",
            ));
        }

        match line.parse() {
            Ok(mode) => return Ok(mode),
            Err(e) => warn!("{e}"),
        }
    }
}
