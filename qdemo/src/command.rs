//! Reading commands off a whitespace-delimited input stream.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

/// One parsed request from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(i32),
    Remove,
    Search(i32),
    Print,
    Illustrate,
    Help(String),
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Remove => "remove",
            Command::Search(_) => "search",
            Command::Print => "print",
            Command::Illustrate => "illustrate",
            Command::Help(_) => "help",
            Command::Quit => "quit",
        }
    }
}

/// Input that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("'{0}' is not an option")]
    Unrecognized(String),

    #[error("{command} expects an integer value, got '{input}'")]
    InvalidNumber {
        command: &'static str,
        input: String,
    },
}

/// Splits a reader into whitespace-separated tokens, crossing line breaks
/// as needed. Blank lines are skipped.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // bytes that aren't UTF-8 become U+FFFD and fail as ordinary bad tokens
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

pub fn parse_value(command: &'static str, input: &str) -> Result<i32, CommandError> {
    input.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        input: input.to_owned(),
    })
}

/// Reads a command name and whatever arguments it takes.
///
/// The outer `Option` is `None` at end of input, including when the input
/// ends between a command name and its argument. A malformed argument is
/// consumed and reported without affecting the following input.
pub fn read_command<R: BufRead>(
    tokens: &mut Tokens<R>,
) -> io::Result<Option<Result<Command, CommandError>>> {
    let name = match tokens.next_token()? {
        Some(name) => name,
        None => return Ok(None),
    };

    let command = match name.as_str() {
        "insert" => match tokens.next_token()? {
            Some(arg) => parse_value("insert", &arg).map(Command::Insert),
            None => return Ok(None),
        },
        "search" => match tokens.next_token()? {
            Some(arg) => parse_value("search", &arg).map(Command::Search),
            None => return Ok(None),
        },
        "help" => match tokens.next_token()? {
            Some(topic) => Ok(Command::Help(topic)),
            None => return Ok(None),
        },
        "remove" => Ok(Command::Remove),
        "print" => Ok(Command::Print),
        "illustrate" => Ok(Command::Illustrate),
        "quit" => Ok(Command::Quit),
        _ => Err(CommandError::Unrecognized(name)),
    };
    Ok(Some(command))
}
