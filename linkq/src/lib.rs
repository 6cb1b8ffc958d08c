#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly linked FIFO queue of integers that always holds at least one node.
//!
//! Values are appended at the tail and removed from the head. The head node
//! cannot be removed while it is the only node, so a [`Queue`] is created
//! from its first value and never becomes empty.

pub mod error;
pub mod queue;

pub use error::{QueueError, Result};
pub use queue::{NodeView, Position, Queue, Render};
