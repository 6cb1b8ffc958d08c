use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::session::SessionConfig;

/// Interactive demo of a singly linked integer queue.
#[derive(Debug, Parser)]
#[command(name = "qdemo", version)]
pub struct Cli {
    /// Value for the head of the queue. Prompted for when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub head: Option<i32>,

    /// Pause between the steps of `illustrate`, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Report unrecognised commands and keep going instead of quitting.
    #[arg(long)]
    pub lenient: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            head: self.head,
            pause: Duration::from_millis(self.delay_ms),
            lenient: self.lenient,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
