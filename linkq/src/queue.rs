use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{QueueError, Result};

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

impl Node {
    fn boxed(value: i32) -> Box<Node> {
        Box::new(Node { value, next: None })
    }
}

/// Location of a node, counted from the head starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl Position {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn next(self) -> Position {
        Position(self.0 + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One step of a [`Render`] walk: a node's value and whether a node follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView {
    pub position: Position,
    pub value: i32,
    pub has_next: bool,
}

impl NodeView {
    /// Position of the successor, `None` for the tail.
    pub fn next_position(&self) -> Option<Position> {
        self.has_next.then(|| self.position.next())
    }
}

/// Singly linked queue of integers.
///
/// The head is stored inline rather than behind an `Option`: a queue is
/// built from its first value and [`Queue::remove`] refuses to take the last
/// node, so there is no empty state to represent.
pub struct Queue {
    head: Box<Node>,
    len: usize,
}

impl Queue {
    pub fn new(head: i32) -> Queue {
        debug!(value = head, "queue initialised");
        Queue {
            head: Node::boxed(head),
            len: 1,
        }
    }

    /// Walks to the tail and appends `value` after it. Returns the inserted value.
    pub fn insert(&mut self, value: i32) -> i32 {
        let mut link = &mut self.head.next;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value));
        self.len += 1;

        debug!(value, len = self.len, "inserted at tail");
        value
    }

    /// Detaches the head and returns its value.
    ///
    /// Fails with [`QueueError::SingleElement`] when the head is the only
    /// node, leaving the queue untouched.
    pub fn remove(&mut self) -> Result<i32> {
        let next = match self.head.next.take() {
            Some(next) => next,
            None => {
                debug!(value = self.head.value, "refusing to remove the only element");
                return Err(QueueError::SingleElement);
            }
        };

        let old = std::mem::replace(&mut self.head, next);
        self.len -= 1;

        debug!(value = old.value, len = self.len, "removed from head");
        Ok(old.value)
    }

    /// Counts nodes by walking from the head to the node without a successor.
    pub fn size(&self) -> usize {
        let mut size = 1;
        let mut node = &*self.head;
        while let Some(next) = node.next.as_deref() {
            size += 1;
            node = next;
        }
        trace!(size, "counted nodes");
        size
    }

    /// Cached node count. Always equal to [`Queue::size`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// A queue always holds its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at the head, the next one [`Queue::remove`] would return.
    pub fn front(&self) -> i32 {
        self.head.value
    }

    pub fn get(&self, position: Position) -> Option<i32> {
        self.render().nth(position.index()).map(|view| view.value)
    }

    /// Position of the first node holding `value`, scanning from the head.
    pub fn search(&self, value: i32) -> Option<Position> {
        let found = self
            .render()
            .find(|view| view.value == value)
            .map(|view| view.position);
        trace!(value, ?found, "searched");
        found
    }

    /// Walks the chain head to tail. Each call starts a fresh walk.
    pub fn render(&self) -> Render<'_> {
        Render {
            next: Some(&*self.head),
            position: 0,
            remaining: self.len,
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.render().map(|view| view.value).collect()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        // unlink one node at a time so long chains don't recurse in Box's drop
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.render().map(|view| view.value)).finish()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for view in self.render() {
            write!(f, "{}", view.value)?;
            if view.has_next {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = NodeView;
    type IntoIter = Render<'a>;

    fn into_iter(self) -> Render<'a> {
        self.render()
    }
}

/// Iterator over a queue's nodes, produced by [`Queue::render`].
pub struct Render<'a> {
    next: Option<&'a Node>,
    position: usize,
    remaining: usize,
}

impl<'a> Iterator for Render<'a> {
    type Item = NodeView;

    fn next(&mut self) -> Option<NodeView> {
        let node = self.next?;
        self.next = node.next.as_deref();

        let view = NodeView {
            position: Position(self.position),
            value: node.value,
            has_next: node.next.is_some(),
        };
        self.position += 1;
        self.remaining = self.remaining.saturating_sub(1);
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Render<'_> {}

impl FusedIterator for Render<'_> {}
