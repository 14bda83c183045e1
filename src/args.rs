//! Command line parsing for the `print_ws` binary
//!
//! ```text
//! print_ws [-s|--strict] [-b|--batch] [-n|--newline] [--] COUNT [CHAR]
//! ```
//!
//! COUNT may be negative, so an argument such as `-5` ends option parsing rather than being
//! treated as an unknown flag.

use crate::constants::*;
use crate::err::*;
use crate::os::{Argv, exit};
use crate::types::*;
use crate::ws::Strategy;

#[derive(Debug, PartialEq, Eq)]
pub enum Args {
    Help,
    Print(PrintArgs),
}

#[derive(Debug, PartialEq, Eq)]
pub struct PrintArgs {
    pub len: c_int,
    pub ws: c_char,
    pub strategy: Strategy,
    pub strict: bool,
    pub newline: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    InvalidOption,
    MissingCount,
    InvalidCount(Errno),
    InvalidChar(Errno),
    TooManyArguments,
}

impl ArgsError {
    /// Display the problem and exit
    pub fn abort(self) -> ! {
        match self {
            ArgsError::InvalidOption => abort_with_msg("Invalid option.  See `--help`"),
            ArgsError::MissingCount => abort_with_msg("No COUNT specified.  See `--help`"),
            ArgsError::InvalidCount(e) => Err::<(), Errno>(e).or_abort("invalid COUNT"),
            ArgsError::InvalidChar(e) => Err::<(), Errno>(e).or_abort("invalid CHAR"),
            ArgsError::TooManyArguments => abort_with_msg("Too many arguments.  See `--help`"),
        }
        // or_abort on an Err never returns
        exit(1)
    }
}

pub fn parse_args(mut argv: Argv) -> Result<Args, ArgsError> {
    // Ignore argv[0]
    let _ = argv.pop();

    let mut strategy = DEFAULT_STRATEGY;
    let mut strict = false;
    let mut newline = false;

    while let Some(arg) = argv.peek() {
        match arg.to_bytes() {
            b"-h" | b"--help" | b"help" => return Ok(Args::Help),
            b"-s" | b"--strict" => strict = true,
            b"-b" | b"--batch" => strategy = Strategy::Batched,
            b"-n" | b"--newline" => newline = true,
            b"--" => {
                let _ = argv.pop();
                break;
            }
            [b'-', b'0'..=b'9', ..] => break,
            [b'-', _, ..] => return Err(ArgsError::InvalidOption),
            _ => break,
        }
        let _ = argv.pop();
    }

    let len = argv
        .pop()
        .ok_or(ArgsError::MissingCount)?
        .parse_count()
        .map_err(ArgsError::InvalidCount)?;

    let ws = match argv.pop() {
        Some(arg) => arg.parse_ws().map_err(ArgsError::InvalidChar)?,
        None => DEFAULT_WS,
    };

    if !argv.is_empty() {
        return Err(ArgsError::TooManyArguments);
    }

    Ok(Args::Print(PrintArgs {
        len,
        ws,
        strategy,
        strict,
        newline,
    }))
}
