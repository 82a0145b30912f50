/**
 * Helper functions for input and output.
 */
use std::io::Write;

use colored::*;
use rustyline::error::ReadlineError;

use super::common::{QuizError, Result};

#[macro_export]
macro_rules! my_println {
    ($($arg:tt)*) => (
        writeln!(std::io::stdout(), $($arg)*).map_err(QuizError::Io)
    );
}

#[macro_export]
macro_rules! my_print {
    ($($arg:tt)*) => (
        write!(std::io::stdout(), $($arg)*).map_err(QuizError::Io)
    );
}

/// Display a prompt and read lines from standard input until one contains a
/// non-whitespace character; that line is returned trimmed. Ctrl+D returns
/// `Ok(None)` and Ctrl+C returns an error. Re-reading on blank input is what
/// keeps empty answers out of the grader.
pub fn prompt(message: &str) -> Result<Option<String>> {
    let mut rl = rustyline::Editor::<()>::new();
    loop {
        match rl.readline(message) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    return Ok(Some(line.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                return Err(QuizError::ReadlineInterrupted);
            }
            Err(ReadlineError::Eof) => {
                return Ok(None);
            }
            Err(_) => {}
        }
    }
}

/// Print `message` to standard output, wrapped to the width of the terminal.
/// `prefix` is prepended to the first line and subsequent lines are indented
/// by its length.
pub fn prettyprint(message: &str, prefix: &str) -> Result<()> {
    prettyprint_colored(message, prefix, None, None)
}

pub fn prettyprint_colored(
    message: &str,
    prefix: &str,
    message_color: Option<Color>,
    prefix_color: Option<Color>,
) -> Result<()> {
    let width = textwrap::termwidth().saturating_sub(prefix.len());
    let indent = " ".repeat(prefix.len());
    for (i, line) in textwrap::wrap_iter(message, width).enumerate() {
        let line = color_optional(&line, message_color);
        if i == 0 {
            my_println!("{}{}", color_optional(prefix, prefix_color), line)?;
        } else {
            my_println!("{}{}", indent, line)?;
        }
    }
    Ok(())
}

fn color_optional(text: &str, color: Option<Color>) -> ColoredString {
    if let Some(color) = color {
        text.color(color)
    } else {
        text.normal()
    }
}
