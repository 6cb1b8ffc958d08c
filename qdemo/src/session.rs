//! The interactive command loop.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use linkq::Queue;
use tracing::{debug, info};

use crate::command::{self, Command, CommandError, Tokens};
use crate::help;
use crate::view;

pub const HEAD_PROMPT: &str = "Enter value for head of queue: ";

pub const COMMAND_PROMPT: &str = "What would you like to do with the queue? \
    (insert [VALUE]/remove/search [VALUE]/print/illustrate/help [COMMAND]/quit)";

/// Knobs for a [`Session`], independent of how they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Head value to start from; prompted for when `None`.
    pub head: Option<i32>,
    /// Delay between rows of `illustrate`.
    pub pause: Duration,
    /// Keep looping after an unrecognised command instead of quitting.
    pub lenient: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            head: None,
            pause: Duration::from_millis(2000),
            lenient: false,
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Unrecognized(String),
    EndOfInput,
    /// Input ended before a head value was read; no queue was built.
    NoHead,
}

pub struct Session<R, W> {
    tokens: Tokens<R>,
    out: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: SessionConfig) -> Session<R, W> {
        Session {
            tokens: Tokens::new(input),
            out,
            config,
        }
    }

    /// Builds the queue, runs commands until one ends the session, then
    /// prints the final queue.
    pub fn run(&mut self) -> io::Result<Exit> {
        let mut queue = match self.init()? {
            Some(queue) => queue,
            None => {
                writeln!(self.out, "\nNo value given for the head of the queue.")?;
                self.out.flush()?;
                return Ok(Exit::NoHead);
            }
        };
        info!(head = queue.front(), lenient = self.config.lenient, "session started");

        let exit = self.command_loop(&mut queue)?;

        writeln!(self.out, "\nFinal queue:")?;
        view::print_plain(&queue, &mut self.out)?;
        self.out.flush()?;

        info!(?exit, final_queue = %queue, "session ended");
        Ok(exit)
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn init(&mut self) -> io::Result<Option<Queue>> {
        if let Some(head) = self.config.head {
            return Ok(Some(Queue::new(head)));
        }

        loop {
            write!(self.out, "{}", HEAD_PROMPT)?;
            self.out.flush()?;

            let token = match self.tokens.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };
            match command::parse_value("head", &token) {
                Ok(head) => return Ok(Some(Queue::new(head))),
                Err(err) => {
                    debug!(%err, "rejected head value");
                    writeln!(self.out, "\nError: {}", err)?;
                }
            }
        }
    }

    fn command_loop(&mut self, queue: &mut Queue) -> io::Result<Exit> {
        loop {
            write!(self.out, "\n{}\n", COMMAND_PROMPT)?;
            self.out.flush()?;

            let command = match command::read_command(&mut self.tokens)? {
                Some(Ok(command)) => command,
                Some(Err(CommandError::Unrecognized(token))) => {
                    debug!(%token, "unrecognised command");
                    if self.config.lenient {
                        writeln!(
                            self.out,
                            "\n\n'{}' is not an option. Try help [COMMAND].",
                            token
                        )?;
                        continue;
                    }
                    writeln!(self.out, "\n\nNot an option, quitting...")?;
                    return Ok(Exit::Unrecognized(token));
                }
                Some(Err(err)) => {
                    debug!(%err, "rejected command");
                    writeln!(self.out, "\nError: {}", err)?;
                    continue;
                }
                None => {
                    writeln!(self.out, "\n\nEnd of input, quitting...")?;
                    return Ok(Exit::EndOfInput);
                }
            };

            debug!(command = command.name(), "dispatching");
            if command == Command::Quit {
                writeln!(self.out, "\n\nQuitting...")?;
                return Ok(Exit::Quit);
            }
            self.execute(queue, command)?;
        }
    }

    fn execute(&mut self, queue: &mut Queue, command: Command) -> io::Result<()> {
        match command {
            Command::Insert(value) => {
                let value = queue.insert(value);
                writeln!(self.out, "\nSuccessfully added {} to the queue", value)?;
            }
            Command::Remove => match queue.remove() {
                Ok(value) => writeln!(self.out, "\nSuccessfully removed {} from queue", value)?,
                Err(err) => writeln!(
                    self.out,
                    "\nError: {}. Try another command or quit and start over",
                    err
                )?,
            },
            Command::Search(value) => match queue.search(value) {
                Some(position) => writeln!(
                    self.out,
                    "\n{} found at position {}",
                    value,
                    position.index()
                )?,
                None => writeln!(self.out, "\nNot found")?,
            },
            Command::Print => view::print_plain(queue, &mut self.out)?,
            Command::Illustrate => view::illustrate(queue, &mut self.out, self.config.pause)?,
            Command::Help(topic) => writeln!(self.out, "\n\n{}", help::describe(&topic))?,
            Command::Quit => {}
        }
        Ok(())
    }
}

/// Runs a whole session over `input`, writing the transcript to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: W, config: SessionConfig) -> io::Result<Exit> {
    Session::new(input, out, config).run()
}
