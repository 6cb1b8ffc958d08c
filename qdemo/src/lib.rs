#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! Command-driven front end for [`linkq::Queue`].
//!
//! A session reads one integer for the head of the queue, then loops over
//! `insert`, `remove`, `search`, `print`, `illustrate`, `help` and `quit`
//! commands, and prints the final queue when it stops.

pub mod cli;
pub mod command;
pub mod help;
pub mod session;
pub mod view;

pub use cli::Cli;
pub use command::{Command, CommandError};
pub use session::{run, Exit, Session, SessionConfig};
