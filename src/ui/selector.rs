//! Numbered-menu prompt. Blocks on input until a valid choice arrives.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Why a line of menu input was refused. Never leaves `select_option`:
/// the user is told and asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSelectionInput {
    #[error("Invalid input; please enter a number.")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}

/// Parses one line of input as a 1-based choice among `option_count` options
/// and returns the zero-based index.
pub fn parse_choice(raw: &str, option_count: usize) -> Result<usize, InvalidSelectionInput> {
    let choice: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidSelectionInput::NotANumber)?;
    if choice >= 1 && (choice as u64) <= option_count as u64 {
        Ok(choice as usize - 1)
    } else {
        Err(InvalidSelectionInput::OutOfRange { max: option_count })
    }
}

/// Prints `prompt` and a 1-based numbered list of `options`, then reads lines from
/// `input` until one names a valid option. Returns its zero-based index.
///
/// Closed input (EOF) is returned as `UnexpectedEof`; an empty option list as
/// `InvalidInput`. Both are fatal for the caller.
pub fn select_option<R, W, S>(
    prompt: &str,
    options: &[S],
    input: &mut R,
    out: &mut W,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("menu '{}' has no options", prompt.trim()),
        ));
    }

    loop {
        writeln!(out, "{}\n", prompt)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, option.as_ref())?;
        }
        write!(out, "Enter choice [1-{}]: ", options.len())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a menu choice",
            ));
        }

        match parse_choice(&line, options.len()) {
            Ok(index) => return Ok(index),
            Err(reason) => {
                log::debug!("Rejected menu input {:?}: {}", line.trim_end(), reason);
                writeln!(out, "\n{}\n", reason)?;
            }
        }
    }
}
