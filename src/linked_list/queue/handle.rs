//! Handle-style access to a [`Queue`].
//!
//! These functions accept absent handles and arguments and report success as
//! a plain `bool`, for callers that drive a queue through an opaque handle
//! (drivers, test harnesses). A `false` result always means the queue was
//! left untouched.

use alloc::boxed::Box;

use tracing::{debug, warn};

use super::{error::QueueError, list::Queue, node::try_box};

/// Allocates an empty queue on the heap.
///
/// Returns `None` if the handle cannot be allocated.
pub fn new() -> Option<Box<Queue>> {
    match try_box(Queue::new()) {
        Ok(queue) => Some(queue),
        Err(_) => {
            warn!(error = %QueueError::HandleAlloc, "failed to create queue");
            None
        }
    }
}

/// Frees the queue, every value it still holds, and the handle itself.
pub fn destroy(queue: Option<Box<Queue>>) {
    drop(queue);
}

/// Inserts a copy of `value` at the head of the queue.
///
/// Returns `false` if either argument is absent or allocation fails.
pub fn insert_head(queue: Option<&mut Queue>, value: Option<&str>) -> bool {
    let (Some(queue), Some(value)) = (queue, value) else {
        debug!("insert_head called without a queue or a value");
        return false;
    };
    queue.insert_head(value).is_ok()
}

/// Inserts a copy of `value` at the tail of the queue.
///
/// Returns `false` if either argument is absent or allocation fails.
pub fn insert_tail(queue: Option<&mut Queue>, value: Option<&str>) -> bool {
    let (Some(queue), Some(value)) = (queue, value) else {
        debug!("insert_tail called without a queue or a value");
        return false;
    };
    queue.insert_tail(value).is_ok()
}

/// Removes the head of the queue, copying its value into `buf` if given.
///
/// See [`Queue::remove_head`] for the buffer contract. Returns `false` if the
/// queue is absent or empty.
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> bool {
    let Some(queue) = queue else {
        debug!("remove_head called without a queue");
        return false;
    };
    queue.remove_head(buf).is_ok()
}

/// Returns the number of values in the queue, or 0 for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

/// Reverses the queue in place. Does nothing for an absent queue.
pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sorts the queue in place, ignoring ASCII case. Does nothing for an absent
/// queue.
pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
