//! Text renderings of a queue: all at once, or one node at a time.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use linkq::{NodeView, Queue};
use tracing::trace;

fn next_label(view: &NodeView) -> String {
    match view.next_position() {
        Some(next) => next.to_string(),
        None => "NULL".to_owned(),
    }
}

pub fn print_plain<W: Write>(queue: &Queue, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for view in queue.render() {
        match view.next_position() {
            Some(next) => writeln!(
                out,
                "Value: {} at {}.   Next: {}",
                view.value, view.position, next
            )?,
            None => writeln!(
                out,
                "Value: {} at {}.   (Final item)",
                view.value, view.position
            )?,
        }
    }
    Ok(())
}

/// Table of values and successors, sleeping `pause` before each row that
/// has a successor. The tail row is written straight away.
pub fn illustrate<W: Write>(queue: &Queue, out: &mut W, pause: Duration) -> io::Result<()> {
    write!(out, "\nValue    |   Next")?;
    for view in queue.render() {
        if view.has_next && !pause.is_zero() {
            out.flush()?;
            trace!(position = view.position.index(), "pausing");
            thread::sleep(pause);
        }
        write!(out, "\n{:<9}|   {}", view.value, next_label(&view))?;
    }
    writeln!(out)?;
    Ok(())
}
